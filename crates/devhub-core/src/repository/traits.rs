//! Tool repository trait definition

use async_trait::async_trait;

use crate::types::{Tool, ToolDraft, ToolPatch};
use super::error::RepositoryResult;

/// Owner of the tool records
///
/// Implementations assign ids and audit fields: `add_tool` sets all four,
/// `update_tool` keeps the id and creation fields and refreshes
/// `last_updated_*`. Unknown ids yield [`RepositoryError::NotFound`](super::RepositoryError::NotFound).
#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// Backend name (e.g., "memory")
    fn name(&self) -> &str;

    /// All tools in insertion order
    async fn list_tools(&self) -> RepositoryResult<Vec<Tool>>;

    async fn get_tool(&self, id: &str) -> RepositoryResult<Tool>;

    /// Insert a new tool authored by `author`
    async fn add_tool(&self, draft: ToolDraft, author: &str) -> RepositoryResult<Tool>;

    /// Apply a partial update authored by `author`
    async fn update_tool(&self, id: &str, patch: ToolPatch, author: &str) -> RepositoryResult<Tool>;

    async fn delete_tool(&self, id: &str) -> RepositoryResult<()>;
}
