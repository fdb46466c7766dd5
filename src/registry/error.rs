//! Error types for package enumeration and registry probing.

use thiserror::Error;

use crate::error::TaskError;

/// # Errors raised while enumerating workspace packages.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListError {
    /// `yarn` could not be spawned at all.
    #[error("failed to run `yarn info`: {source}")]
    Spawn {
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// `yarn info` ran but exited unsuccessfully.
    #[error("`yarn info` exited with {status}: {stderr}")]
    Yarn {
        /// The process exit status.
        status: std::process::ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// `yarn info` produced output that is not UTF-8.
    #[error("`yarn info` produced non-UTF-8 output")]
    InvalidUtf8,

    /// A line of `yarn info --json` output did not parse as a JSON string.
    #[error("unparseable `yarn info` line `{line}`: {source}")]
    Parse {
        /// The offending line.
        line: String,
        /// The underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// # Errors raised while probing a registry for one package.
///
/// A probe needs a definite yes/no; anything else is an error the caller
/// must see, not a silent "missing". `2xx` and `404` are answers, every
/// other status is [`ProbeError::UnexpectedStatus`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The request never produced a status (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Http {
        /// The tarball URL that was probed.
        url: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered with a status that is neither success nor 404.
    #[error("unexpected status {status} for {package}")]
    UnexpectedStatus {
        /// The HTTP status received.
        status: reqwest::StatusCode,
        /// `name@version` of the probed package.
        package: String,
    },

    /// A private package was probed but no private registry is configured.
    #[error("package {package} is private but no private registry is configured")]
    NoPrivateRegistry {
        /// `name@version` of the probed package.
        package: String,
    },
}

impl From<ProbeError> for TaskError {
    fn from(err: ProbeError) -> Self {
        TaskError::Fail {
            error: err.to_string(),
        }
    }
}
