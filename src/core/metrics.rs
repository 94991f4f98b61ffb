//! Dispatch counters
//!
//! Every logging call ends in exactly one outcome:
//!
//! - **filtered**: below the minimum level, no entry was built
//! - **delivered**: every configured writer accepted the entry
//! - **dropped**: at least one writer returned an error or panicked
//!
//! `write_failures` counts individual writer failures, so a dropped entry that
//! two writers rejected adds one to `dropped` and two to `write_failures`.
//! A call that passes the level filter while no writer is configured is not
//! counted.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by a [`Logger`](super::Logger)
///
/// ```
/// use rust_loki_logger::{LogLevel, Logger};
///
/// let logger = Logger::builder().min_level(LogLevel::Warn).build();
/// logger.info("below the minimum");
///
/// assert_eq!(logger.metrics().filtered_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    filtered: AtomicU64,
    delivered: AtomicU64,
    dropped: AtomicU64,
    write_failures: AtomicU64,
}

/// Point-in-time copy of [`LoggerMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub filtered: u64,
    pub delivered: u64,
    pub dropped: u64,
    pub write_failures: u64,
}

impl MetricsSnapshot {
    /// Entries that reached the writers, whatever the outcome
    pub fn dispatched(&self) -> u64 {
        self.delivered + self.dropped
    }
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            filtered: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one dispatched entry and how many writers failed on it
    pub(crate) fn record_dispatch(&self, failed_writers: u64) {
        if failed_writers == 0 {
            self.delivered.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            self.write_failures
                .fetch_add(failed_writers, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Percentage of dispatched entries that were dropped
    ///
    /// Filtered calls never reach a writer and are left out. 0.0 before the
    /// first dispatch.
    pub fn drop_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        match snapshot.dispatched() {
            0 => 0.0,
            dispatched => snapshot.dropped as f64 * 100.0 / dispatched as f64,
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filtered: self.filtered_count(),
            delivered: self.delivered_count(),
            dropped: self.dropped_count(),
            write_failures: self.write_failures(),
        }
    }

    pub fn reset(&self) {
        self.filtered.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}
