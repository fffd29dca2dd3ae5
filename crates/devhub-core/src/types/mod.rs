//! Core types for the tool catalog
//!
//! This module contains the records shared across the repository,
//! the filter engine, the codecs and the preference store.

mod tool;
mod filter;
mod preferences;

pub use tool::{Tool, ToolDraft, ToolPatch};
pub use filter::{FilterState, SortKey};
pub use preferences::{UserPreferences, ViewEntry, MAX_RECENTLY_VIEWED, MAX_VIEW_HISTORY, RATING_RANGE};
