use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Recognition -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Recognition -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Recognition -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Recognition -- ", "{}", message);
    }
}
