//! DevHub Core
//!
//! A personal catalog of developer tools: CRUD over tool records, search
//! and filtering, favorites, ratings, notes, side-by-side comparison and
//! flat-file import/export. This crate holds everything below the
//! presentation layer; a UI shell drives it through [`Catalog`].
//!
//! ## Import flow
//!
//! Imports are two-phase. Nothing is written until the user confirms:
//!
//! ```rust,ignore
//! use devhub_core::{Catalog, FileFormat};
//!
//! let batch = catalog.parse_import(&contents, FileFormat::from_file_name(&name)?)?;
//! if ask_user(&batch.prompt()) {
//!     let report = catalog.commit_import(batch.confirm()).await;
//!     notify(&report.summary());
//! }
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod storage;
pub mod preferences;
pub mod filter;
pub mod codec;
pub mod import;
pub mod repository;
pub mod comparison;
pub mod catalog;

// Re-export commonly used types
pub use types::{
    Tool, ToolDraft, ToolPatch,
    FilterState, SortKey,
    UserPreferences, ViewEntry,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, MemoryLogger, SharedLogger};

pub use config::{ConfigFile, HubConfig, ConfigError, ConfigResult};

pub use storage::{
    LocalStorage, StorageError, StorageResult,
    MemoryStorage, FileStorage,
    create_storage, StorageOptions,
};

pub use preferences::{PreferenceService, PreferenceError, PreferenceResult};

pub use filter::{visible_tools, categories, popular_tags};

pub use codec::{CodecError, CodecResult, ExportFile, FileFormat};

pub use import::{parse_import, commit_import, ParsedBatch, ConfirmedBatch, ImportReport, ImportFailure};

pub use repository::{ToolRepository, MemoryToolRepository, RepositoryError, RepositoryResult};

pub use comparison::ComparisonSet;

pub use catalog::{Catalog, CatalogError, CatalogResult, Facets};
