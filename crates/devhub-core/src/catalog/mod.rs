//! Catalog facade
//!
//! [`Catalog`] is what a UI shell holds on to: it turns user intents into
//! repository and preference mutations and serves the filtered view.

mod error;
mod service;

pub use error::{CatalogError, CatalogResult};
pub use service::{Catalog, Facets, DELETE_PROMPT};
