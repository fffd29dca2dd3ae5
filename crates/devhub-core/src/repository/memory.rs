//! In-memory tool repository

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::types::{Tool, ToolDraft, ToolPatch};
use super::error::{RepositoryError, RepositoryResult};
use super::traits::ToolRepository;

const SAMPLE_AUTHOR: &str = "user_1";
const SAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Repository holding tools in process memory
///
/// Nothing is persisted; a fresh instance starts empty or with the
/// sample catalog.
#[derive(Debug, Default)]
pub struct MemoryToolRepository {
    tools: RwLock<Vec<Tool>>,
}

impl MemoryToolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with a fixed set of tools
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools: RwLock::new(tools),
        }
    }

    /// Repository seeded with the demo catalog (Docker, VS Code, Postman)
    pub fn with_sample_data() -> Self {
        Self::with_tools(sample_tools())
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }
}

fn new_tool_id() -> String {
    format!("tool_{}", uuid::Uuid::new_v4().simple())
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[async_trait]
impl ToolRepository for MemoryToolRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_tools(&self) -> RepositoryResult<Vec<Tool>> {
        Ok(self.tools.read().clone())
    }

    async fn get_tool(&self, id: &str) -> RepositoryResult<Tool> {
        self.tools
            .read()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn add_tool(&self, draft: ToolDraft, author: &str) -> RepositoryResult<Tool> {
        let timestamp = now();
        let tool = Tool {
            id: new_tool_id(),
            name: draft.name,
            category: draft.category,
            subcategory: draft.subcategory,
            link: draft.link,
            description: draft.description,
            tags: draft.tags,
            created_by: author.to_string(),
            created_at: timestamp.clone(),
            last_updated_by: author.to_string(),
            last_updated_at: timestamp,
        };

        self.tools.write().push(tool.clone());
        Ok(tool)
    }

    async fn update_tool(&self, id: &str, patch: ToolPatch, author: &str) -> RepositoryResult<Tool> {
        let mut tools = self.tools.write();
        let tool = tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        patch.apply_to(tool);
        tool.last_updated_by = author.to_string();
        tool.last_updated_at = now();
        Ok(tool.clone())
    }

    async fn delete_tool(&self, id: &str) -> RepositoryResult<()> {
        let mut tools = self.tools.write();
        let before = tools.len();
        tools.retain(|t| t.id != id);
        if tools.len() == before {
            return Err(RepositoryError::not_found(id));
        }
        Ok(())
    }
}

fn sample_tool(id: &str, draft: ToolDraft) -> Tool {
    Tool {
        id: id.to_string(),
        name: draft.name,
        category: draft.category,
        subcategory: draft.subcategory,
        link: draft.link,
        description: draft.description,
        tags: draft.tags,
        created_by: SAMPLE_AUTHOR.to_string(),
        created_at: SAMPLE_TIMESTAMP.to_string(),
        last_updated_by: SAMPLE_AUTHOR.to_string(),
        last_updated_at: SAMPLE_TIMESTAMP.to_string(),
    }
}

/// The demo catalog
pub fn sample_tools() -> Vec<Tool> {
    vec![
        sample_tool(
            "1",
            ToolDraft::new("Docker", "DevOps")
                .with_subcategory("Containerização")
                .with_link("https://docker.com")
                .with_description(
                    "Plataforma de containerização que permite empacotar aplicações e suas dependências em containers leves e portáteis.",
                )
                .with_tags(["containers", "devops", "deployment"]),
        ),
        sample_tool(
            "2",
            ToolDraft::new("VS Code", "Editor")
                .with_subcategory("IDE")
                .with_link("https://code.visualstudio.com")
                .with_description(
                    "Editor de código-fonte gratuito e de código aberto desenvolvido pela Microsoft com suporte para debugging, controle Git integrado e extensões.",
                )
                .with_tags(["editor", "ide", "microsoft", "typescript"]),
        ),
        sample_tool(
            "3",
            ToolDraft::new("Postman", "API Testing")
                .with_subcategory("HTTP Client")
                .with_link("https://postman.com")
                .with_description(
                    "Plataforma colaborativa para desenvolvimento de API que simplifica cada etapa do ciclo de vida da API e agiliza a colaboração.",
                )
                .with_tags(["api", "testing", "http", "client"]),
        ),
    ]
}
