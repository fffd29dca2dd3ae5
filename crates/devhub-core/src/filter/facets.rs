//! Derived lists for the filter sidebar

use std::collections::{BTreeSet, HashMap};

use crate::types::Tool;

/// Number of tags the sidebar offers as quick filters
pub const POPULAR_TAG_LIMIT: usize = 10;

/// Distinct non-empty categories, sorted
pub fn categories(tools: &[Tool]) -> Vec<String> {
    tools
        .iter()
        .filter(|t| !t.category.is_empty())
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Most used tags, by descending count then name, at most `limit`
pub fn popular_tags(tools: &[Tool], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in tools.iter().flat_map(|t| t.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().map(|(tag, n)| (tag.to_string(), n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolDraft;

    fn tool(category: &str, tags: &[&str]) -> Tool {
        let draft = ToolDraft::new("t", category).with_tags(tags.iter().copied());
        Tool {
            id: "id".to_string(),
            name: draft.name,
            category: draft.category,
            subcategory: draft.subcategory,
            link: draft.link,
            description: draft.description,
            tags: draft.tags,
            created_by: String::new(),
            created_at: String::new(),
            last_updated_by: String::new(),
            last_updated_at: String::new(),
        }
    }

    #[test]
    fn test_categories() {
        let tools = vec![tool("Editor", &[]), tool("", &[]), tool("DevOps", &[]), tool("Editor", &[])];
        assert_eq!(categories(&tools), vec!["DevOps", "Editor"]);
    }

    #[test]
    fn test_popular_tags() {
        let tools = vec![
            tool("A", &["rust", "cli"]),
            tool("B", &["cli", "json"]),
            tool("C", &["cli", "rust", "http"]),
        ];
        let tags = popular_tags(&tools, 3);
        assert_eq!(
            tags,
            vec![("cli".to_string(), 3), ("rust".to_string(), 2), ("http".to_string(), 1)]
        );
        assert!(popular_tags(&[], POPULAR_TAG_LIMIT).is_empty());
    }
}
