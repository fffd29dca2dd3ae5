//! Filter/sort engine
//!
//! Pure functions over borrowed snapshots of the catalog and the user's
//! preferences.

mod engine;
mod facets;

pub use engine::{sort_tools, visible_tools};
pub use facets::{categories, popular_tags, POPULAR_TAG_LIMIT};
