//! Side-by-side comparison selection

use serde::{Deserialize, Serialize};

use crate::types::Tool;

/// Ordered, duplicate-free selection of tool ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<String>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool; false when it was already selected
    pub fn add(&mut self, tool_id: &str) -> bool {
        if self.contains(tool_id) {
            return false;
        }
        self.ids.push(tool_id.to_string());
        true
    }

    /// Remove a tool; false when it was not selected
    pub fn remove(&mut self, tool_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != tool_id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.ids.iter().any(|id| id == tool_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Selected tools in selection order; ids no longer in `tools` are skipped
    pub fn selected<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        self.ids
            .iter()
            .filter_map(|id| tools.iter().find(|t| &t.id == id))
            .collect()
    }

    /// Unselected tools whose name or category contains `search` (case-insensitive)
    pub fn candidates<'a>(&self, tools: &'a [Tool], search: &str) -> Vec<&'a Tool> {
        let query = search.trim().to_lowercase();
        tools
            .iter()
            .filter(|t| !self.contains(&t.id))
            .filter(|t| {
                query.is_empty()
                    || t.name.to_lowercase().contains(&query)
                    || t.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sample_tools;

    #[test]
    fn test_add_remove() {
        let mut set = ComparisonSet::new();
        assert!(set.add("1"));
        assert!(set.add("3"));
        assert!(!set.add("1"));
        assert_eq!(set.ids(), ["1", "3"]);

        assert!(set.remove("1"));
        assert!(!set.remove("1"));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_selected_keeps_order_and_skips_missing() {
        let tools = sample_tools();
        let mut set = ComparisonSet::new();
        set.add("3");
        set.add("gone");
        set.add("1");

        let names: Vec<_> = set.selected(&tools).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Postman", "Docker"]);
    }

    #[test]
    fn test_candidates() {
        let tools = sample_tools();
        let mut set = ComparisonSet::new();
        set.add("1");

        let by_category: Vec<_> = set.candidates(&tools, "EDIT").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(by_category, vec!["2"]);

        let all: Vec<_> = set.candidates(&tools, "").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(all, vec!["2", "3"]);

        assert!(set.candidates(&tools, "docker").is_empty());
    }
}
