//! Filter and sort pipeline producing the visible tool list

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{FilterState, SortKey, Tool, UserPreferences};

/// Compute the tools to display
///
/// Stages run in a fixed order and each one only narrows the set:
/// favorites gate, text search, category, required tags, rating threshold,
/// then a stable sort. Inputs are only read.
pub fn visible_tools(
    tools: &[Tool],
    filters: &FilterState,
    preferences: &UserPreferences,
    show_favorites_only: bool,
    sort_key: SortKey,
) -> Vec<Tool> {
    let query = filters.text.to_lowercase();

    let mut visible: Vec<Tool> = tools
        .iter()
        .filter(|tool| !show_favorites_only || preferences.is_favorite(&tool.id))
        .filter(|tool| query.is_empty() || matches_text(tool, &query, preferences))
        .filter(|tool| filters.category.as_deref().map_or(true, |c| tool.category == c))
        .filter(|tool| filters.tags.iter().all(|tag| tool.has_tag(tag)))
        .filter(|tool| meets_rating(tool, filters.min_rating, preferences))
        .cloned()
        .collect();

    sort_tools(&mut visible, sort_key, preferences);
    visible
}

/// Case-insensitive substring match over the searchable fields and the note
///
/// `query` must already be lowercased.
fn matches_text(tool: &Tool, query: &str, preferences: &UserPreferences) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(query);

    contains(&tool.name)
        || contains(&tool.description)
        || contains(&tool.category)
        || contains(&tool.subcategory)
        || tool.tags.iter().any(|tag| contains(tag))
        || preferences.note(&tool.id).map_or(false, contains)
}

fn meets_rating(tool: &Tool, min_rating: Option<u8>, preferences: &UserPreferences) -> bool {
    match min_rating {
        None | Some(0) => true,
        Some(threshold) => preferences.rating(&tool.id).map_or(false, |r| r >= threshold),
    }
}

/// Stable sort by a single key
pub fn sort_tools(tools: &mut [Tool], sort_key: SortKey, preferences: &UserPreferences) {
    match sort_key {
        SortKey::Name => tools.sort_by_cached_key(|t| (collation_key(&t.name), t.name.clone())),
        SortKey::Category => tools.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Rating => tools.sort_by(|a, b| {
            let rating = |t: &Tool| preferences.rating(&t.id).unwrap_or(0);
            rating(b).cmp(&rating(a))
        }),
        SortKey::Recent => tools.sort_by_key(|t| preferences.recency_rank(&t.id).unwrap_or(usize::MAX)),
    }
}

/// Accent- and case-insensitive ordering key: "Ágil" sorts with "agil"
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
