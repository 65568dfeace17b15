mod config;
mod metrics;
mod scenario;

#[cfg(test)]
mod scenario_tests;

use anyhow::Result;
use bucketcrab::TokenBucketLimiter;
use std::sync::Arc;

use crate::config::{Config, Mode};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from environment variables and CLI arguments
    let config = Config::from_env_and_args()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("bucketcrab_demo={}", config.log_level).parse()?),
        )
        .init();

    // One limiter shared by every worker
    let limiter = Arc::new(TokenBucketLimiter::new(config.capacity, config.refill_rate)?);

    tracing::info!(
        "Rate limiter demo: mode={:?} capacity={} refill_rate={}/s duration={}s interval={}ms workers={}",
        config.mode,
        config.capacity,
        config.refill_rate,
        config.duration.as_secs(),
        config.request_interval.as_millis(),
        config.workers
    );

    let counters = match config.mode {
        Mode::Burst => scenario::run_single_key_burst(limiter, &config).await,
        Mode::Concurrent => scenario::run_concurrent_same_key(limiter, &config).await,
    };

    tracing::info!(
        "Done: accepted={} rejected={}",
        counters.accepted(),
        counters.rejected()
    );

    Ok(())
}
