//! Preference store
//!
//! [`PreferenceService`] owns the user's favorites, ratings, notes and view
//! history. It is built once per process around an injected
//! [`LocalStorage`](crate::storage::LocalStorage) backend and passed by
//! reference to whoever needs it.

mod error;
mod service;

pub use error::{PreferenceError, PreferenceResult};
pub use service::{PreferenceService, DEFAULT_PREFERENCES_KEY, PREFERENCES_FILE_NAME};
