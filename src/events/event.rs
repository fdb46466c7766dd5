//! # Events emitted during a probe run.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Run events**: the batch as a whole (started, completed)
//! - **Probe events**: one package's check (starting, completed, failed)
//!
//! The [`Event`] struct carries optional metadata such as the package
//! specifier, availability flags, and failure reasons.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Probes complete in whatever order the registries answer,
//! so `seq` is the only way to restore exact publication order.
//!
//! ## Example
//! ```rust
//! use pkgprobe::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ProbeCompleted)
//!     .with_package("react@18.2.0")
//!     .with_public(Some(true))
//!     .with_private(Some(false));
//!
//! assert_eq!(ev.kind, EventKind::ProbeCompleted);
//! assert_eq!(ev.package.as_deref(), Some("react@18.2.0"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of probe-run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A probe run started.
    ///
    /// Sets:
    /// - `count`: number of packages about to be probed
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RunStarted,

    /// A package's probe task was admitted and is about to hit the registry.
    ///
    /// Sets:
    /// - `package`: `name@version` specifier
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ProbeStarting,

    /// A package's probe finished with definite availability answers.
    ///
    /// Sets:
    /// - `package`: `name@version` specifier
    /// - `public`: availability on the public registry (`None` = not checked)
    /// - `private`: availability on the private registry (`None` = not checked)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ProbeCompleted,

    /// A package's probe failed outright (transport error, unexpected status).
    ///
    /// Sets:
    /// - `package`: `name@version` specifier
    /// - `reason`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ProbeFailed,

    /// All probe handles settled.
    ///
    /// Sets:
    /// - `count`: number of packages checked
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RunCompleted,
}

/// Probe-run event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// `name@version` of the package, if applicable.
    pub package: Option<Arc<str>>,
    /// Human-readable reason (probe failures).
    pub reason: Option<Arc<str>>,
    /// Availability on the public registry (`None` = not checked).
    pub public: Option<bool>,
    /// Availability on the private registry (`None` = not checked).
    pub private: Option<bool>,
    /// Package count (run-level events).
    pub count: Option<usize>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            package: None,
            reason: None,
            public: None,
            private: None,
            count: None,
        }
    }

    /// Attaches a `name@version` package specifier.
    #[inline]
    pub fn with_package(mut self, package: impl Into<Arc<str>>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the public-registry availability answer.
    #[inline]
    pub fn with_public(mut self, public: Option<bool>) -> Self {
        self.public = public;
        self
    }

    /// Attaches the private-registry availability answer.
    #[inline]
    pub fn with_private(mut self, private: Option<bool>) -> Self {
        self.private = private;
        self
    }

    /// Attaches a package count.
    #[inline]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}
