use tracing::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::Instant;

/// Ticket lifecycle counters
#[derive(Debug, Default)]
pub struct LifecycleMetrics {
    pub transitions_applied: AtomicU64,
    pub transitions_rejected: AtomicU64,
    pub tickets_not_found: AtomicU64,
    pub agencies_floated: AtomicU64,
    pub tickets_created: AtomicU64,
}

impl LifecycleMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_transition(&self) {
        self.transitions_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.transitions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.tickets_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_floated(&self, count: usize) {
        self.agencies_floated.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_created(&self) {
        self.tickets_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> LifecycleStats {
        LifecycleStats {
            transitions_applied: self.transitions_applied.load(Ordering::Relaxed),
            transitions_rejected: self.transitions_rejected.load(Ordering::Relaxed),
            tickets_not_found: self.tickets_not_found.load(Ordering::Relaxed),
            agencies_floated: self.agencies_floated.load(Ordering::Relaxed),
            tickets_created: self.tickets_created.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Lifecycle metrics: applied={}, rejected={}, not_found={}, floated={}, created={}",
            stats.transitions_applied,
            stats.transitions_rejected,
            stats.tickets_not_found,
            stats.agencies_floated,
            stats.tickets_created
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleStats {
    pub transitions_applied: u64,
    pub transitions_rejected: u64,
    pub tickets_not_found: u64,
    pub agencies_floated: u64,
    pub tickets_created: u64,
}

/// Global lifecycle metrics instance
static LIFECYCLE_METRICS: LazyLock<Arc<LifecycleMetrics>> =
    LazyLock::new(|| Arc::new(LifecycleMetrics::new()));

/// Shared handle to the process-wide lifecycle metrics
pub fn lifecycle_metrics() -> Arc<LifecycleMetrics> {
    Arc::clone(&LIFECYCLE_METRICS)
}

/// Time an operation and log its duration when finished
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn finish(self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}
