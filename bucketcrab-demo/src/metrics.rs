//! Verdict counters shared between workers and the summary logger
//!
//! Atomic counters keep the hot path allocation-free; the summary task reads
//! them once a second and logs the deltas.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Running admit/reject totals
pub struct Counters {
    accepted: AtomicU64,
    rejected: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Counters {
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }

    /// Record one verdict
    pub fn record(&self, admitted: bool) {
        if admitted {
            self.accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the once-a-second summary task
///
/// Logs per-second accept/reject deltas and the running totals until the
/// returned handle is aborted by the scenario that spawned it.
pub fn spawn_summary_logger(counters: Arc<Counters>, start: Instant) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately; skip it so the first summary
        // covers a full second.
        interval.tick().await;

        let mut last_accepted = 0u64;
        let mut last_rejected = 0u64;

        loop {
            interval.tick().await;

            let accepted = counters.accepted();
            let rejected = counters.rejected();
            tracing::info!(
                "t={}ms SUMMARY +a={} +r={} total_accepted={} total_rejected={}",
                start.elapsed().as_millis(),
                accepted - last_accepted,
                rejected - last_rejected,
                accepted,
                rejected
            );

            last_accepted = accepted;
            last_rejected = rejected;
        }
    })
}
