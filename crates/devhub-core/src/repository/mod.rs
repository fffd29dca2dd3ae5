//! Tool repository
//!
//! [`ToolRepository`] owns the tool records. The in-memory implementation
//! stands in for a remote document store.

mod error;
mod traits;
mod memory;

pub use error::{RepositoryError, RepositoryResult};
pub use traits::ToolRepository;
pub use memory::{sample_tools, MemoryToolRepository};
