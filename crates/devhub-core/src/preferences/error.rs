//! Preference store errors

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while mutating or persisting preferences
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Preferences JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;
