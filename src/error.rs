//! Error types used by the task pool and its construction.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`] — invalid configuration detected at construction time.
//! - [`TaskError`] — failure of an individual submitted task.
//!
//! Both types provide `as_label` helpers for logging/metrics. Errors raised
//! by the registry-probing side live in [`crate::registry`].

use thiserror::Error;

/// # Errors raised while constructing runtime components.
///
/// Construction is fail-fast: an invalid value produces an error instead of
/// a component that silently misbehaves later (a pool with a concurrency
/// limit of zero would never admit a single task).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Concurrency limit was zero; the pool would stall every submission.
    #[error("concurrency limit must be at least 1")]
    ZeroConcurrency,

    /// A registry base URL did not parse.
    #[error("invalid registry url `{url}`: {source}")]
    InvalidRegistryUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The shared HTTP client could not be built.
    #[error("failed to build http client: {source}")]
    HttpClient {
        /// The underlying client builder failure.
        #[source]
        source: reqwest::Error,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pkgprobe::ConfigError;
    ///
    /// assert_eq!(ConfigError::ZeroConcurrency.as_label(), "zero_concurrency");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::ZeroConcurrency => "zero_concurrency",
            ConfigError::InvalidRegistryUrl { .. } => "invalid_registry_url",
            ConfigError::HttpClient { .. } => "http_client",
        }
    }
}

/// # Failure of a single submitted task.
///
/// A task's error is delivered through that task's [`Submission`] handle
/// only; it never aborts the pool or any other task, and there is no retry.
///
/// [`Submission`]: crate::Submission
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// The task ran to completion and reported an error.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The task panicked; the panic was caught and converted.
    #[error("task panicked: {message}")]
    Panicked {
        /// The panic payload, if it carried a message.
        message: String,
    },
}

impl TaskError {
    /// Shorthand for [`TaskError::Fail`] from any displayable message.
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pkgprobe::TaskError;
    ///
    /// assert_eq!(TaskError::fail("boom").as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Panicked { .. } => "task_panicked",
        }
    }
}
