//! Tool catalog records

use serde::{Deserialize, Serialize};

/// A cataloged developer tool
///
/// Records are owned by a [`ToolRepository`](crate::repository::ToolRepository).
/// The `id` and `created_*` fields are assigned on insert and never change;
/// `last_updated_*` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique, opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Top-level category (e.g. "DevOps")
    pub category: String,
    /// Optional subcategory; empty when absent
    #[serde(default)]
    pub subcategory: String,
    /// Homepage link (not validated)
    #[serde(default)]
    pub link: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Tags attached to this tool
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub last_updated_by: String,
    pub last_updated_at: String,
}

impl Tool {
    /// Check whether this tool carries a tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Editable fields of this tool as a draft
    pub fn to_draft(&self) -> ToolDraft {
        ToolDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            link: self.link.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// User-editable tool fields, without identity or audit data
///
/// Produced by edit forms and by the import decoders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ToolDraft {
    /// Create a draft with a name and category
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Set the subcategory
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Set the link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a tool; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ToolPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Apply the present fields onto a tool
    pub fn apply_to(self, tool: &mut Tool) {
        if let Some(name) = self.name {
            tool.name = name;
        }
        if let Some(category) = self.category {
            tool.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            tool.subcategory = subcategory;
        }
        if let Some(link) = self.link {
            tool.link = link;
        }
        if let Some(description) = self.description {
            tool.description = description;
        }
        if let Some(tags) = self.tags {
            tool.tags = tags;
        }
    }
}

impl From<ToolDraft> for ToolPatch {
    /// A full replacement of every editable field
    fn from(draft: ToolDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            subcategory: Some(draft.subcategory),
            link: Some(draft.link),
            description: Some(draft.description),
            tags: Some(draft.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tool {
        Tool {
            id: "tool_1".to_string(),
            name: "Docker".to_string(),
            category: "DevOps".to_string(),
            subcategory: "Containers".to_string(),
            link: "https://docker.com".to_string(),
            description: "Container platform".to_string(),
            tags: vec!["containers".to_string(), "devops".to_string()],
            created_by: "user_1".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_updated_by: "user_1".to_string(),
            last_updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_tool_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdBy"], "user_1");
        assert_eq!(json["lastUpdatedAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("created_by").is_none());
    }

    #[test]
    fn test_tool_missing_optional_fields() {
        let tool: Tool = serde_json::from_str(
            r#"{
                "id": "x", "name": "jq", "category": "CLI",
                "createdBy": "u", "createdAt": "t",
                "lastUpdatedBy": "u", "lastUpdatedAt": "t"
            }"#,
        )
        .unwrap();
        assert!(tool.subcategory.is_empty());
        assert!(tool.tags.is_empty());
    }

    #[test]
    fn test_draft_builder() {
        let draft = ToolDraft::new("Postman", "API Testing")
            .with_link("https://postman.com")
            .with_tags(["api", "http"]);
        assert_eq!(draft.name, "Postman");
        assert_eq!(draft.tags, vec!["api", "http"]);
        assert!(draft.subcategory.is_empty());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut tool = sample();
        ToolPatch::new()
            .with_description("Build, ship, run")
            .apply_to(&mut tool);
        assert_eq!(tool.description, "Build, ship, run");
        assert_eq!(tool.name, "Docker");
        assert_eq!(tool.tags.len(), 2);
    }

    #[test]
    fn test_patch_from_draft_replaces_everything() {
        let mut tool = sample();
        ToolPatch::from(ToolDraft::new("Podman", "DevOps")).apply_to(&mut tool);
        assert_eq!(tool.name, "Podman");
        assert!(tool.subcategory.is_empty());
        assert!(tool.tags.is_empty());
        assert_eq!(tool.id, "tool_1");
    }

    #[test]
    fn test_has_tag() {
        let tool = sample();
        assert!(tool.has_tag("devops"));
        assert!(!tool.has_tag("DevOps"));
    }
}
