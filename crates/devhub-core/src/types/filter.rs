//! Filter criteria and sort keys for the catalog view

use serde::{Deserialize, Serialize};

/// Active filter criteria
///
/// Ephemeral: the caller rebuilds it on every keystroke or toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query (case-insensitive substring match)
    #[serde(default)]
    pub text: String,
    /// Exact category match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags that must all be present
    #[serde(default)]
    pub tags: Vec<String>,
    /// Minimum stored rating; 0 disables the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a required tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the minimum rating
    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Toggle a required tag on or off, as the sidebar tag chips do
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// True when no criterion narrows the result
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.category.is_none()
            && self.tags.is_empty()
            && self.min_rating.unwrap_or(0) == 0
    }
}

/// Ordering applied as the last stage of the filter pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive name order
    #[default]
    Name,
    /// Category order
    Category,
    /// Highest rating first; unrated counts as 0
    Rating,
    /// Most recently viewed first; never-viewed tools last
    Recent,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Rating => "rating",
            SortKey::Recent => "recent",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "rating" => Ok(SortKey::Rating),
            "recent" | "recency" => Ok(SortKey::Recent),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        assert!(FilterState::new().is_empty());
        assert!(!FilterState::new().with_text("   ").is_empty());
        assert!(FilterState::new().with_min_rating(0).is_empty());
        assert!(!FilterState::new().with_tag("api").is_empty());
    }

    #[test]
    fn test_toggle_tag() {
        let mut filters = FilterState::new();
        filters.toggle_tag("api");
        filters.toggle_tag("http");
        assert_eq!(filters.tags, vec!["api", "http"]);
        filters.toggle_tag("api");
        assert_eq!(filters.tags, vec!["http"]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("recency".parse::<SortKey>().unwrap(), SortKey::Recent);
        assert!("stars".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Name);
    }
}
