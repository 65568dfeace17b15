//! Load scenarios driving one shared limiter
//!
//! Both scenarios generate requests for a single subject key until the
//! configured deadline, log every verdict, and hand back the shared counters
//! for the final totals line.

use crate::config::Config;
use crate::metrics::{self, Counters};
use bucketcrab::TokenBucketLimiter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// One loop issuing requests for a single key until the deadline
pub async fn run_single_key_burst(
    limiter: Arc<TokenBucketLimiter>,
    config: &Config,
) -> Arc<Counters> {
    let counters = Arc::new(Counters::new());
    let start = Instant::now();
    let deadline = start + config.duration;

    let summary = metrics::spawn_summary_logger(counters.clone(), start);

    request_loop(
        limiter,
        counters.clone(),
        config.key.clone(),
        1,
        start,
        deadline,
        config.request_interval,
    )
    .await;

    summary.abort();
    counters
}

/// Many workers issuing requests for the same key concurrently
pub async fn run_concurrent_same_key(
    limiter: Arc<TokenBucketLimiter>,
    config: &Config,
) -> Arc<Counters> {
    let counters = Arc::new(Counters::new());
    let start = Instant::now();
    let deadline = start + config.duration;

    let summary = metrics::spawn_summary_logger(counters.clone(), start);

    let mut workers = JoinSet::new();
    for worker in 1..=config.workers {
        workers.spawn(request_loop(
            limiter.clone(),
            counters.clone(),
            config.key.clone(),
            worker,
            start,
            deadline,
            config.request_interval,
        ));
    }

    while let Some(result) = workers.join_next().await {
        if let Err(e) = result {
            tracing::error!("Worker task panicked: {}", e);
        }
    }

    summary.abort();
    counters
}

async fn request_loop(
    limiter: Arc<TokenBucketLimiter>,
    counters: Arc<Counters>,
    key: String,
    worker: usize,
    start: Instant,
    deadline: Instant,
    request_interval: Duration,
) {
    let mut seq = 0u64;

    while Instant::now() < deadline {
        let admitted = limiter.accept(&key);
        counters.record(admitted);
        seq += 1;

        let verdict = if admitted { "ACCEPT" } else { "REJECT" };
        tracing::info!(
            "t={}ms worker={} key={} {} a={} r={} req={}",
            start.elapsed().as_millis(),
            worker,
            key,
            verdict,
            counters.accepted(),
            counters.rejected(),
            seq
        );

        if !request_interval.is_zero() {
            tokio::time::sleep(request_interval).await;
        }
    }
}
