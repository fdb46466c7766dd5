//! Probe-run events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to events emitted while a probe run is in flight.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: the CLI run loop (run started/completed) and each probe
//!   task (starting/completed/failed).
//! - **Consumer**: a single listener forwarding into a
//!   [`SubscriberSet`](crate::SubscriberSet).
//!
//! The task pool itself publishes nothing: its tasks are anonymous closures
//! and its only caller-visible surface is the [`Submission`](crate::Submission)
//! handle.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
