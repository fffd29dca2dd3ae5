//! Catalog facade errors

use thiserror::Error;

use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::preferences::PreferenceError;
use crate::repository::RepositoryError;

/// Any failure surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
