//! Preference service backed by local storage

use std::sync::Arc;

use parking_lot::RwLock;

use crate::codec::ExportFile;
use crate::logging::{Logger, SharedLogger};
use crate::storage::LocalStorage;
use crate::types::{UserPreferences, RATING_RANGE};

use super::error::{PreferenceError, PreferenceResult};

/// Storage key holding the serialized preferences blob
pub const DEFAULT_PREFERENCES_KEY: &str = "devtools-hub-preferences";

/// File name used for preference snapshot downloads
pub const PREFERENCES_FILE_NAME: &str = "devtools-hub-preferences.json";

/// Single-writer owner of [`UserPreferences`]
///
/// Hydrated once at construction. Every mutation updates the in-memory
/// record and then re-serializes the whole record to storage; there are no
/// partial writes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use devhub_core::preferences::PreferenceService;
/// use devhub_core::storage::MemoryStorage;
/// use devhub_core::logging::NoOpLogger;
///
/// let prefs = PreferenceService::load(Arc::new(MemoryStorage::new()), NoOpLogger::shared());
/// prefs.toggle_favorite("tool_1").unwrap();
/// assert!(prefs.is_favorite("tool_1"));
/// ```
pub struct PreferenceService {
    storage: Arc<dyn LocalStorage>,
    key: String,
    state: RwLock<UserPreferences>,
    logger: SharedLogger,
}

impl PreferenceService {
    /// Hydrate from the default storage key
    pub fn load(storage: Arc<dyn LocalStorage>, logger: SharedLogger) -> Self {
        Self::load_with_key(storage, DEFAULT_PREFERENCES_KEY, logger)
    }

    /// Hydrate from a specific storage key
    ///
    /// An absent key yields defaults. An unreadable or corrupt blob is
    /// logged and also yields defaults; it never fails construction.
    pub fn load_with_key(storage: Arc<dyn LocalStorage>, key: impl Into<String>, logger: SharedLogger) -> Self {
        let key = key.into();
        let state = hydrate(storage.as_ref(), &key, logger.as_ref());
        Self {
            storage,
            key,
            state: RwLock::new(state),
            logger,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// A copy of the current preferences
    pub fn snapshot(&self) -> UserPreferences {
        self.state.read().clone()
    }

    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.state.read().is_favorite(tool_id)
    }

    pub fn rating(&self, tool_id: &str) -> Option<u8> {
        self.state.read().rating(tool_id)
    }

    pub fn note(&self, tool_id: &str) -> Option<String> {
        self.state.read().note(tool_id).map(str::to_string)
    }

    /// Add or remove a favorite; returns whether the tool is now a favorite
    pub fn toggle_favorite(&self, tool_id: &str) -> PreferenceResult<bool> {
        self.mutate(|prefs| prefs.toggle_favorite(tool_id))
    }

    /// Record a view of a tool at the current time
    pub fn add_to_recently_viewed(&self, tool_id: &str) -> PreferenceResult<()> {
        let timestamp = chrono::Utc::now().to_rfc3339();
        self.mutate(|prefs| prefs.record_view(tool_id, timestamp))
    }

    /// Store a personal note for a tool, replacing any previous note
    pub fn set_note(&self, tool_id: &str, note: impl Into<String>) -> PreferenceResult<()> {
        let note = note.into();
        self.mutate(|prefs| {
            prefs.notes.insert(tool_id.to_string(), note);
        })
    }

    /// Rate a tool from 1 to 5
    pub fn set_rating(&self, tool_id: &str, rating: u8) -> PreferenceResult<()> {
        if !RATING_RANGE.contains(&rating) {
            return Err(PreferenceError::InvalidRating(rating));
        }
        self.mutate(|prefs| {
            prefs.ratings.insert(tool_id.to_string(), rating);
        })
    }

    /// Empty the recently-viewed list and the view history
    pub fn clear_history(&self) -> PreferenceResult<()> {
        self.mutate(UserPreferences::clear_history)
    }

    /// Pretty-printed JSON snapshot for download
    pub fn export_snapshot(&self) -> PreferenceResult<ExportFile> {
        let contents = serde_json::to_string_pretty(&*self.state.read())?;
        Ok(ExportFile::new(PREFERENCES_FILE_NAME, "application/json", contents))
    }

    /// Replace all preferences with a parsed snapshot (no merge)
    ///
    /// A snapshot that fails to parse leaves the current preferences intact.
    pub fn import_snapshot(&self, json: &str) -> PreferenceResult<()> {
        let imported: UserPreferences = serde_json::from_str(json)?;
        if let Some((tool_id, rating)) = imported.invalid_ratings().into_iter().next() {
            self.logger.warn(&format!(
                "[Preferences] Rejecting snapshot: rating {} for {} is out of range",
                rating, tool_id
            ));
            return Err(PreferenceError::InvalidRating(rating));
        }
        self.logger.info(&format!(
            "[Preferences] Importing snapshot with {} favorites, {} ratings",
            imported.favorites.len(),
            imported.ratings.len()
        ));
        self.mutate(move |prefs| *prefs = imported)
    }

    fn mutate<F, R>(&self, apply: F) -> PreferenceResult<R>
    where
        F: FnOnce(&mut UserPreferences) -> R,
    {
        let mut state = self.state.write();
        let result = apply(&mut state);

        let blob = serde_json::to_string(&*state)?;
        if let Err(e) = self.storage.set_item(&self.key, &blob) {
            self.logger.error(&format!(
                "[Preferences] Failed to persist to {} storage: {}",
                self.storage.name(),
                e
            ));
            return Err(e.into());
        }

        Ok(result)
    }
}

impl std::fmt::Debug for PreferenceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceService")
            .field("storage", &self.storage.name())
            .field("key", &self.key)
            .finish()
    }
}

fn hydrate(storage: &dyn LocalStorage, key: &str, logger: &dyn Logger) -> UserPreferences {
    let blob = match storage.get_item(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return UserPreferences::default(),
        Err(e) => {
            logger.error(&format!("[Preferences] Error reading preferences: {}", e));
            return UserPreferences::default();
        }
    };

    match serde_json::from_str::<UserPreferences>(&blob) {
        Ok(mut prefs) => {
            let dropped = prefs.retain_valid_ratings();
            if dropped > 0 {
                logger.warn(&format!("[Preferences] Dropped {} out-of-range ratings", dropped));
            }
            prefs
        }
        Err(e) => {
            logger.error(&format!("[Preferences] Error loading preferences: {}", e));
            UserPreferences::default()
        }
    }
}
