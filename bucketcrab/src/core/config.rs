//! Limiter configuration
//!
//! This module provides the [`LimiterConfig`] type which captures the
//! process-wide admission policy: how large a burst a key may spend, and how
//! fast its bucket refills. Every key tracked by one limiter shares the same
//! policy.

use super::ConfigError;


/// Default burst capacity when none is specified
pub const DEFAULT_CAPACITY: i64 = 10;
/// Default refill rate (tokens per second) when none is specified
pub const DEFAULT_REFILL_RATE: f64 = 10.0;

/// Admission policy shared by every key of a limiter
///
/// A `LimiterConfig` is validated on construction and immutable afterwards.
///
/// # Examples
///
/// ```
/// use bucketcrab::LimiterConfig;
///
/// // 100 tokens of burst, 25 tokens per second sustained
/// let config = LimiterConfig::new(100, 25.0).unwrap();
/// assert_eq!(config.capacity(), 100);
/// assert_eq!(config.refill_rate(), 25.0);
///
/// // The defaults: 10 tokens of burst, 10 per second
/// let config = LimiterConfig::default();
/// assert_eq!(config.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimiterConfig {
    capacity: i64,
    refill_rate: f64,
}

impl LimiterConfig {
    /// Create a validated configuration
    ///
    /// # Parameters
    ///
    /// - `capacity`: maximum burst size, and the token count a newly seen key
    ///   starts from. Must be greater than zero.
    /// - `refill_rate`: tokens added per second of elapsed time. Must be
    ///   finite and non-negative; a rate of `0` means a drained bucket never
    ///   refills.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCapacity`] when `capacity <= 0`
    /// - [`ConfigError::InvalidRefillRate`] when `refill_rate` is negative,
    ///   NaN, or infinite
    pub fn new(capacity: i64, refill_rate: f64) -> Result<Self, ConfigError> {
        if capacity <= 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        if !refill_rate.is_finite() || refill_rate < 0.0 {
            return Err(ConfigError::InvalidRefillRate(refill_rate));
        }

        Ok(LimiterConfig {
            capacity,
            refill_rate,
        })
    }

    /// Maximum burst size
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Tokens added per second of elapsed time
    pub fn refill_rate(&self) -> f64 {
        self.refill_rate
    }
}

impl Default for LimiterConfig {
    fn default() -> Self {
        LimiterConfig {
            capacity: DEFAULT_CAPACITY,
            refill_rate: DEFAULT_REFILL_RATE,
        }
    }
}
