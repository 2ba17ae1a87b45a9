use log::{debug, info, warn};

/// Tags pipeline log records with the airfoil they concern.
pub struct LogManager {
    subject: String,
}

impl LogManager {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    pub fn record(&self, stage: &str, message: &str) {
        info!("[{}] {}: {}", self.subject, stage, message);
    }

    pub fn detail(&self, stage: &str, message: &str) {
        debug!("[{}] {}: {}", self.subject, stage, message);
    }

    pub fn warn(&self, stage: &str, message: &str) {
        warn!("[{}] {}: {}", self.subject, stage, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("airfoil")
    }
}
