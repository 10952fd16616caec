use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Bridges the domain `Logger` port to the `tracing` crate.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "card_scanner", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "card_scanner", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "card_scanner", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "card_scanner", "{}", message);
    }
}
