//! Core components of the bucketcrab rate limiting library
//!
//! This module contains the fundamental building blocks:
//! - [`config`]: Limiter configuration and validation
//! - [`limiter`]: The token bucket admission logic
//! - [`store`]: Concurrent storage backends for per-key bucket state

pub mod config;
pub mod limiter;
pub mod store;

pub use config::LimiterConfig;
pub use limiter::TokenBucketLimiter;
pub use store::{BucketState, CoarseStore, ShardedStore, ShardedStoreBuilder, Store};

use std::error::Error;
use std::fmt;

/// Errors raised when constructing a limiter with an invalid policy
///
/// Construction is the only fallible operation: admission itself never
/// fails, it only returns a verdict.
///
/// # Example
///
/// ```
/// use bucketcrab::{ConfigError, TokenBucketLimiter};
///
/// match TokenBucketLimiter::new(0, 10.0) {
///     Err(ConfigError::InvalidCapacity(n)) => {
///         println!("capacity must be positive, got {}", n);
///     }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Burst capacity must be greater than zero
    InvalidCapacity(i64),
    /// Refill rate must be a finite, non-negative number
    InvalidRefillRate(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity(n) => {
                write!(f, "invalid capacity: {n} (must be greater than 0)")
            }
            ConfigError::InvalidRefillRate(r) => {
                write!(f, "invalid refill rate: {r} (must be finite and non-negative)")
            }
        }
    }
}

impl Error for ConfigError {}
