//! Two-phase import
//!
//! [`parse_import`] decodes a file into a [`ParsedBatch`]. Only after the
//! user confirms does the batch become a [`ConfirmedBatch`] that
//! [`commit_import`] writes to the repository.

mod batch;
mod pipeline;

pub use batch::{ConfirmedBatch, ImportFailure, ImportReport, ParsedBatch};
pub use pipeline::{commit_import, parse_import};
