//! Per-installation user preferences

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Maximum number of ids kept in the recently-viewed list
pub const MAX_RECENTLY_VIEWED: usize = 10;

/// Maximum number of entries kept in the view history log
pub const MAX_VIEW_HISTORY: usize = 100;

/// Accepted rating values
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A single entry of the view history log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry {
    pub tool_id: String,
    /// RFC 3339 timestamp of the view
    pub timestamp: String,
}

/// User state kept apart from the tool catalog
///
/// Serialized as a single JSON blob; every field defaults to empty so older
/// or partial blobs still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Favorite tool ids (set semantics)
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Most-recent-first, at most [`MAX_RECENTLY_VIEWED`] ids
    #[serde(default)]
    pub recently_viewed: Vec<String>,
    /// Tool id -> personal note
    #[serde(default)]
    pub notes: HashMap<String, String>,
    /// Tool id -> rating in 1..=5
    #[serde(default)]
    pub ratings: HashMap<String, u8>,
    /// Newest first, at most [`MAX_VIEW_HISTORY`] entries
    #[serde(default)]
    pub view_history: Vec<ViewEntry>,
}

impl UserPreferences {
    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorites.iter().any(|id| id == tool_id)
    }

    pub fn rating(&self, tool_id: &str) -> Option<u8> {
        self.ratings.get(tool_id).copied()
    }

    pub fn note(&self, tool_id: &str) -> Option<&str> {
        self.notes.get(tool_id).map(String::as_str)
    }

    /// Position of a tool in the recently-viewed list (0 = most recent)
    pub fn recency_rank(&self, tool_id: &str) -> Option<usize> {
        self.recently_viewed.iter().position(|id| id == tool_id)
    }

    /// Add or remove a favorite; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, tool_id: &str) -> bool {
        if self.is_favorite(tool_id) {
            self.favorites.retain(|id| id != tool_id);
            false
        } else {
            self.favorites.push(tool_id.to_string());
            true
        }
    }

    /// Move a tool to the front of the recency list and log the view
    pub fn record_view(&mut self, tool_id: &str, timestamp: impl Into<String>) {
        self.recently_viewed.retain(|id| id != tool_id);
        self.recently_viewed.insert(0, tool_id.to_string());
        self.recently_viewed.truncate(MAX_RECENTLY_VIEWED);

        self.view_history.insert(
            0,
            ViewEntry {
                tool_id: tool_id.to_string(),
                timestamp: timestamp.into(),
            },
        );
        self.view_history.truncate(MAX_VIEW_HISTORY);
    }

    /// Drop the recency list and the view log
    pub fn clear_history(&mut self) {
        self.recently_viewed.clear();
        self.view_history.clear();
    }

    /// Ratings outside [`RATING_RANGE`], sorted by tool id
    pub fn invalid_ratings(&self) -> Vec<(String, u8)> {
        let mut invalid: Vec<(String, u8)> = self
            .ratings
            .iter()
            .filter(|(_, r)| !RATING_RANGE.contains(*r))
            .map(|(id, r)| (id.clone(), *r))
            .collect();
        invalid.sort();
        invalid
    }

    /// Remove ratings outside [`RATING_RANGE`]; returns how many were removed
    pub fn retain_valid_ratings(&mut self) -> usize {
        let before = self.ratings.len();
        self.ratings.retain(|_, r| RATING_RANGE.contains(&*r));
        before - self.ratings.len()
    }
}
