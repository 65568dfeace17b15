#[cfg(test)]
mod tests {
    use crate::config::{Config, Mode};
    use crate::scenario;
    use bucketcrab::TokenBucketLimiter;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_config(mode: Mode, capacity: i64, refill_rate: f64) -> Config {
        Config {
            mode,
            capacity,
            refill_rate,
            duration: Duration::from_millis(200),
            request_interval: Duration::from_millis(1),
            workers: 4,
            key: "shared".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_workers_admit_exactly_capacity() {
        let config = test_config(Mode::Concurrent, 5, 0.0);
        let limiter =
            Arc::new(TokenBucketLimiter::new(config.capacity, config.refill_rate).unwrap());

        let counters = scenario::run_concurrent_same_key(limiter.clone(), &config).await;

        // With a zero refill rate the workers can only ever spend the initial
        // burst, however their requests interleave.
        assert_eq!(counters.accepted(), 5);
        assert!(counters.rejected() > 0);
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[tokio::test]
    async fn test_burst_loop_spends_initial_burst() {
        let config = test_config(Mode::Burst, 10, 0.0);
        let limiter =
            Arc::new(TokenBucketLimiter::new(config.capacity, config.refill_rate).unwrap());

        let counters = scenario::run_single_key_burst(limiter, &config).await;

        assert_eq!(counters.accepted(), 10);
        assert!(counters.rejected() > 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_refilled_run_keeps_admitting() {
        // A high refill rate keeps tokens flowing for the whole run
        let config = test_config(Mode::Concurrent, 10, 1000.0);
        let limiter =
            Arc::new(TokenBucketLimiter::new(config.capacity, config.refill_rate).unwrap());

        let counters = scenario::run_concurrent_same_key(limiter, &config).await;

        assert!(counters.accepted() > 10);
    }
}
