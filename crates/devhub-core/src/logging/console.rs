//! Console logger implementation

use super::traits::Logger;

/// A logger that writes info to stdout and everything else to stderr
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[DevHub]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{} DEBUG: {}", self.prefix, message);
    }

    fn info(&self, message: &str) {
        println!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        assert_eq!(ConsoleLogger::new().prefix(), "[DevHub]");
        assert_eq!(ConsoleLogger::with_prefix("[Import]").prefix(), "[Import]");
    }

    #[test]
    fn test_console_logger_logs() {
        let logger = ConsoleLogger::new();
        crate::log_debug!(logger, "loaded {} tools", 3);
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
