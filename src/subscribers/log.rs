//! # Progress printer for probe runs.
//!
//! [`LogWriter`] prints per-package progress to stdout in a human-readable
//! format, one line per settled probe.
//!
//! ## Output format
//! ```text
//! [run] probing 42 packages
//! react@18.2.0 -> public: true, private: false
//! @acme/core@1.4.0 -> public: -, private: true
//! left-pad@1.3.0 -> error: unexpected status 503 for left-pad@1.3.0
//! [run] checked 42 packages
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

use super::Subscribe;

/// Simple stdout progress subscriber.
///
/// Prints one line per completed or failed probe, plus run boundaries.
/// For structured logging or metrics, implement a custom [`Subscribe`].
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::RunStarted => {
                if let Some(count) = e.count {
                    println!("[run] probing {count} packages");
                }
            }
            // Starts are not worth a line of their own; completions carry
            // everything a reader needs.
            EventKind::ProbeStarting => {}
            EventKind::ProbeCompleted => {
                let package = e.package.as_deref().unwrap_or("?");
                println!(
                    "{package} -> public: {}, private: {}",
                    flag(e.public),
                    flag(e.private)
                );
            }
            EventKind::ProbeFailed => {
                let package = e.package.as_deref().unwrap_or("?");
                let reason = e.reason.as_deref().unwrap_or("unknown error");
                println!("{package} -> error: {reason}");
            }
            EventKind::RunCompleted => {
                if let Some(count) = e.count {
                    println!("[run] checked {count} packages");
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Renders an availability flag the way the report does: `-` for unchecked.
fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "-",
    }
}
