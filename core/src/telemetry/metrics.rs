use serde::Serialize;
use std::sync::Mutex;

/// Thread-safe export/failure counters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub exports: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_export(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.exports += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|m| *m).unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = MetricsRecorder::new();
        metrics.record_export();
        metrics.record_export();
        metrics.record_error();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                exports: 2,
                errors: 1
            }
        );
    }
}
