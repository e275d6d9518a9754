//! Throttle metrics for observability

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Metrics for a single client/throttler pair
#[derive(Debug, Default)]
pub struct ThrottleMetrics {
    /// Current pending queue depth
    queue_depth: AtomicUsize,
    /// Total submissions enqueued
    enqueued_count: AtomicU64,
    /// Total dispatch units started
    started_count: AtomicU64,
    /// Total dispatch units completed successfully
    completed_count: AtomicU64,
    /// Total dispatch units failed (serialization or transport)
    failed_count: AtomicU64,
}

impl ThrottleMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current queue depth
    pub fn queue_depth(&self) -> usize {
        self.queue_depth.load(Ordering::Relaxed)
    }

    /// Set current queue depth
    pub fn set_queue_depth(&self, depth: usize) {
        self.queue_depth.store(depth, Ordering::Relaxed);
    }

    /// Get total enqueued count
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued_count.load(Ordering::Relaxed)
    }

    /// Increment enqueued count
    pub fn inc_enqueued_count(&self) {
        self.enqueued_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get started dispatch count
    pub fn started_count(&self) -> u64 {
        self.started_count.load(Ordering::Relaxed)
    }

    /// Increment started dispatch count
    pub fn inc_started_count(&self) {
        self.started_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get completed dispatch count
    pub fn completed_count(&self) -> u64 {
        self.completed_count.load(Ordering::Relaxed)
    }

    /// Increment completed dispatch count
    pub fn inc_completed_count(&self) {
        self.completed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failed dispatch count
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    /// Increment failed dispatch count
    pub fn inc_failed_count(&self) {
        self.failed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queue_depth: self.queue_depth(),
            enqueued_count: self.enqueued_count(),
            started_count: self.started_count(),
            completed_count: self.completed_count(),
            failed_count: self.failed_count(),
        }
    }
}

/// Snapshot of throttle metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub queue_depth: usize,
    pub enqueued_count: u64,
    pub started_count: u64,
    pub completed_count: u64,
    pub failed_count: u64,
}
