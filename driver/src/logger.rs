use tracing::{debug, error, info, trace, warn};

use kernel::interface::logger::Logger;

/// Forwards service messages to `tracing`, tagged with the logger name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for TracingLogger {
    fn trace(&self, message: &str) {
        trace!(logger = %self.name, "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(logger = %self.name, "{message}");
    }

    fn info(&self, message: &str) {
        info!(logger = %self.name, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(logger = %self.name, "{message}");
    }

    fn error(&self, message: &str) {
        error!(logger = %self.name, "{message}");
    }
}
