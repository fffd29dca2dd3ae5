//! Catalog facade used by the presentation layer

use std::sync::Arc;

use crate::codec::{self, ExportFile, FileFormat};
use crate::comparison::ComparisonSet;
use crate::config::HubConfig;
use crate::filter::{self, POPULAR_TAG_LIMIT};
use crate::import::{self, ConfirmedBatch, ImportReport, ParsedBatch};
use crate::logging::{Logger, SharedLogger};
use crate::preferences::PreferenceService;
use crate::repository::{MemoryToolRepository, ToolRepository};
use crate::types::{FilterState, SortKey, Tool, ToolDraft, ToolPatch};
use crate::{log_info, log_warn};

use super::error::CatalogResult;

/// Question shown before a tool is deleted
pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir esta ferramenta?";

/// Sidebar data derived from the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    /// (tag, usage count), most used first
    pub popular_tags: Vec<(String, usize)>,
}

/// Entry point wiring the repository, the preference store and a logger
///
/// Every user intent (save, delete, view, export, import) goes through
/// here; the filter engine is re-run on demand with fresh snapshots.
pub struct Catalog {
    repository: Arc<dyn ToolRepository>,
    preferences: Arc<PreferenceService>,
    author: String,
    logger: SharedLogger,
}

impl Catalog {
    pub fn new(
        repository: Arc<dyn ToolRepository>,
        preferences: Arc<PreferenceService>,
        author: impl Into<String>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            repository,
            preferences,
            author: author.into(),
            logger,
        }
    }

    /// Catalog over the sample repository and the configured preference storage
    pub fn from_config(config: &HubConfig, logger: SharedLogger) -> CatalogResult<Self> {
        let storage = config.open_storage()?;
        let preferences = PreferenceService::load_with_key(storage, config.preferences_key.clone(), logger.clone());
        Ok(Self::new(
            Arc::new(MemoryToolRepository::with_sample_data()),
            Arc::new(preferences),
            config.author.clone(),
            logger,
        ))
    }

    pub fn repository(&self) -> &Arc<dyn ToolRepository> {
        &self.repository
    }

    pub fn preferences(&self) -> &PreferenceService {
        &self.preferences
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Filtered and sorted tools for display
    pub async fn visible_tools(
        &self,
        filters: &FilterState,
        show_favorites_only: bool,
        sort_key: SortKey,
    ) -> CatalogResult<Vec<Tool>> {
        let tools = self.repository.list_tools().await?;
        let preferences = self.preferences.snapshot();
        Ok(filter::visible_tools(&tools, filters, &preferences, show_favorites_only, sort_key))
    }

    /// Update the tool being edited, or add a new one when `editing` is `None`
    pub async fn save_tool(&self, editing: Option<&str>, draft: ToolDraft) -> CatalogResult<Tool> {
        let tool = match editing {
            Some(id) => {
                let tool = self
                    .repository
                    .update_tool(id, ToolPatch::from(draft), &self.author)
                    .await?;
                log_info!(self.logger, "[Catalog] Updated tool {}", tool.id);
                tool
            }
            None => {
                let tool = self.repository.add_tool(draft, &self.author).await?;
                log_info!(self.logger, "[Catalog] Added tool {}", tool.id);
                tool
            }
        };
        Ok(tool)
    }

    /// Delete a tool once the user confirmed; `Ok(false)` when declined
    pub async fn delete_tool(&self, id: &str, confirmed: bool) -> CatalogResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        if let Err(e) = self.repository.delete_tool(id).await {
            log_warn!(self.logger, "[Catalog] Failed to delete tool {}: {}", id, e);
            return Err(e.into());
        }
        log_info!(self.logger, "[Catalog] Deleted tool {}", id);
        Ok(true)
    }

    /// Fetch a tool for the detail view and record the view
    pub async fn view_tool(&self, id: &str) -> CatalogResult<Tool> {
        let tool = self.repository.get_tool(id).await?;
        self.preferences.add_to_recently_viewed(&tool.id)?;
        Ok(tool)
    }

    pub fn toggle_favorite(&self, id: &str) -> CatalogResult<bool> {
        Ok(self.preferences.toggle_favorite(id)?)
    }

    /// Export the whole catalog
    pub async fn export(&self, format: FileFormat) -> CatalogResult<ExportFile> {
        let tools = self.repository.list_tools().await?;
        let file = codec::export(&tools, format)?;
        log_info!(self.logger, "[Catalog] Exported {} tools to {}", tools.len(), file.file_name);
        Ok(file)
    }

    /// Export the preference record as JSON
    pub fn export_preferences(&self) -> CatalogResult<ExportFile> {
        Ok(self.preferences.export_snapshot()?)
    }

    /// Replace the preference record from a JSON snapshot
    pub fn import_preferences(&self, json: &str) -> CatalogResult<()> {
        Ok(self.preferences.import_snapshot(json)?)
    }

    /// Decode an uploaded file; see [`import::parse_import`]
    pub fn parse_import(&self, text: &str, format: FileFormat) -> CatalogResult<ParsedBatch> {
        Ok(import::parse_import(text, format)?)
    }

    /// Write a confirmed batch under this catalog's author
    pub async fn commit_import(&self, batch: ConfirmedBatch) -> ImportReport {
        import::commit_import(self.repository.as_ref(), batch, &self.author, self.logger.as_ref()).await
    }

    /// Categories and the most used tags
    pub async fn facets(&self) -> CatalogResult<Facets> {
        let tools = self.repository.list_tools().await?;
        Ok(Facets {
            categories: filter::categories(&tools),
            popular_tags: filter::popular_tags(&tools, POPULAR_TAG_LIMIT),
        })
    }

    /// Tools in a comparison selection, in selection order
    pub async fn compared_tools(&self, selection: &ComparisonSet) -> CatalogResult<Vec<Tool>> {
        let tools = self.repository.list_tools().await?;
        Ok(selection.selected(&tools).into_iter().cloned().collect())
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("repository", &self.repository.name())
            .field("preferences_key", &self.preferences.key())
            .field("author", &self.author)
            .finish()
    }
}
