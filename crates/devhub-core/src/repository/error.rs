//! Repository error types

use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No tool with this id
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The backing store refused the write
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl RepositoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
