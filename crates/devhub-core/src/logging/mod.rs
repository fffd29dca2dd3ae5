//! Logging abstractions
//!
//! Services take an injected `Arc<dyn Logger>`; the global file logger is
//! an opt-in debugging aid controlled by environment variables.

mod traits;
mod console;
mod memory;
pub mod file_logger;

pub use traits::{Logger, NoOpLogger, SharedLogger};
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;

pub use file_logger::{log, debug, info, warn, error, log_file_path, clear_log, LogLevel};
