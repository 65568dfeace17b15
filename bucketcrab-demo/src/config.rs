//! Demo configuration and CLI argument parsing
//!
//! All flags can also be set via environment variables with the BUCKETCRAB_
//! prefix; CLI arguments take precedence over environment variables, which
//! take precedence over the built-in defaults (the values the original demo
//! hard-codes).
//!
//! # Example Usage
//!
//! ```bash
//! # Single-key burst loop with the defaults
//! bucketcrab-demo
//!
//! # 14 workers hammering one shared key
//! bucketcrab-demo --mode concurrent
//!
//! # Mixed (CLI overrides env)
//! export BUCKETCRAB_CAPACITY=100
//! bucketcrab-demo --mode concurrent --workers 32 --refill-rate 50
//! ```

use anyhow::{Result, anyhow};
use clap::Parser;
use std::time::Duration;

/// Demo mode: how load is generated against the shared limiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// One loop issuing requests for a single key
    Burst,
    /// Many workers issuing requests for the same key concurrently
    Concurrent,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "burst" | "single" => Ok(Mode::Burst),
            "concurrent" | "multi" | "threads" => Ok(Mode::Concurrent),
            _ => Err(anyhow!(
                "Invalid mode: {}. Valid options are: burst, concurrent",
                s
            )),
        }
    }
}

/// Command-line arguments for the demo
///
/// All arguments can also be set via environment variables with the
/// BUCKETCRAB_ prefix. CLI arguments take precedence over environment
/// variables.
#[derive(Parser, Debug)]
#[command(
    name = "bucketcrab-demo",
    about = "Load-generating demo for the bucketcrab rate limiter",
    long_about = "Drives a shared token bucket rate limiter with generated load and logs every verdict plus a per-second summary.\n\nEnvironment variables with BUCKETCRAB_ prefix are supported. CLI arguments take precedence over environment variables."
)]
pub struct Args {
    #[arg(
        long,
        value_name = "MODE",
        help = "Demo mode: burst, concurrent",
        default_value = "burst",
        env = "BUCKETCRAB_MODE"
    )]
    pub mode: Mode,

    // Limiter policy
    #[arg(
        long,
        value_name = "TOKENS",
        help = "Burst capacity of every bucket",
        default_value_t = 10,
        env = "BUCKETCRAB_CAPACITY"
    )]
    pub capacity: i64,
    #[arg(
        long,
        value_name = "RATE",
        help = "Tokens refilled per second",
        default_value_t = 10.0,
        env = "BUCKETCRAB_REFILL_RATE"
    )]
    pub refill_rate: f64,

    // Load shape
    #[arg(
        long,
        value_name = "SECS",
        help = "How long to generate load",
        default_value_t = 8,
        env = "BUCKETCRAB_DURATION_SECS"
    )]
    pub duration_secs: u64,
    #[arg(
        long,
        value_name = "MS",
        help = "Pause between requests per worker (0 for none)",
        default_value_t = 25,
        env = "BUCKETCRAB_REQUEST_INTERVAL_MS"
    )]
    pub request_interval_ms: u64,
    #[arg(
        long,
        value_name = "N",
        help = "Number of workers in concurrent mode",
        default_value_t = 14,
        env = "BUCKETCRAB_WORKERS"
    )]
    pub workers: usize,
    #[arg(
        long,
        value_name = "KEY",
        help = "Subject key every request is issued for",
        default_value = "user-1",
        env = "BUCKETCRAB_KEY"
    )]
    pub key: String,

    // General options
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level: error, warn, info, debug, trace",
        default_value = "info",
        env = "BUCKETCRAB_LOG_LEVEL"
    )]
    pub log_level: String,
}

/// Validated demo configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub capacity: i64,
    pub refill_rate: f64,
    pub duration: Duration,
    pub request_interval: Duration,
    pub workers: usize,
    pub key: String,
    pub log_level: String,
}

impl Config {
    /// Build configuration from environment variables and CLI arguments
    ///
    /// Clap handles the precedence: CLI arguments over environment variables
    /// over default values.
    pub fn from_env_and_args() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    fn from_args(args: Args) -> Result<Self> {
        if args.duration_secs == 0 {
            return Err(anyhow!("Duration must be at least 1 second"));
        }
        if args.mode == Mode::Concurrent && args.workers == 0 {
            return Err(anyhow!("Concurrent mode needs at least one worker"));
        }

        Ok(Config {
            mode: args.mode,
            capacity: args.capacity,
            refill_rate: args.refill_rate,
            duration: Duration::from_secs(args.duration_secs),
            request_interval: Duration::from_millis(args.request_interval_ms),
            workers: args.workers,
            key: args.key,
            log_level: args.log_level,
        })
    }
}
