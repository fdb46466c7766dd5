//! # Event subscribers for probe runs.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`]
//! fan-out, and the built-in [`LogWriter`] progress printer.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   probe tasks ── publish(Event) ──► Bus ──► SubscriberSet::attach listener
//!                                                  │
//!                                             emit(&Event)
//!                                        ┌─────────┼─────────┐
//!                                        ▼         ▼         ▼
//!                                   LogWriter   metrics    custom
//! ```
//!
//! Each subscriber is driven by its own worker over a bounded queue, so a
//! slow subscriber never blocks publishers or its peers.

mod log;
mod set;
mod subscribe;

pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
