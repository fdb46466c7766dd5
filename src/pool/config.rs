//! # Pool configuration.
//!
//! Provides [`PoolConfig`], the construction-time settings for
//! [`TaskPool`](crate::TaskPool).
//!
//! ## Rules
//! - `concurrency = 0` is rejected by [`PoolConfig::validate`]. A zero limit
//!   would leave every submission queued forever, so it is treated as a
//!   configuration error rather than a sentinel.

use crate::error::ConfigError;

/// Concurrency limit used when the caller does not specify one.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Configuration for a [`TaskPool`](crate::TaskPool).
///
/// ## Field semantics
/// - `concurrency`: maximum number of tasks simultaneously in the running
///   state. Fixed for the pool's lifetime.
///
/// ## Example
/// ```
/// use pkgprobe::PoolConfig;
///
/// let cfg = PoolConfig::default();
/// assert_eq!(cfg.concurrency, 10);
/// assert!(cfg.validate().is_ok());
///
/// let bad = PoolConfig { concurrency: 0 };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of tasks allowed to run simultaneously.
    pub concurrency: usize,
}

impl PoolConfig {
    /// Creates a config with an explicit concurrency limit.
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self { concurrency }
    }

    /// Checks the configuration for values the pool cannot operate with.
    ///
    /// The limit is unsigned, so "at most zero" collapses to exactly zero;
    /// that single invalid value is rejected here, before a pool exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    /// Default configuration: `concurrency = 10`.
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
