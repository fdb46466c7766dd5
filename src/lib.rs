//! # pkgprobe
//!
//! **pkgprobe** checks that every package a yarn workspace depends on is
//! actually downloadable from the registries that are supposed to serve it,
//! fanning the per-package checks out through a bounded async task pool.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌──────────────────┐
//!   │ yarn info --json │   (workspace enumeration)
//!   └────────┬─────────┘
//!            ▼
//!   ┌─────────────────────────────────────────────────────────┐
//!   │  TaskPool (bounded concurrency)                         │
//!   │  - FIFO pending queue                                   │
//!   │  - running counter ≤ concurrency limit                  │
//!   │  - one Submission handle per probe                      │
//!   └───┬───────────────┬───────────────┬─────────────────────┘
//!       ▼               ▼               ▼
//!   ┌────────┐      ┌────────┐      ┌────────┐
//!   │ probe  │      │ probe  │      │ probe  │   (HEAD tarball URL,
//!   │ task 1 │      │ task 2 │      │ task K │    public + private)
//!   └───┬────┘      └───┬────┘      └───┬────┘
//!       │ publishes     │ publishes     │ publishes
//!       ▼               ▼               ▼
//!   ┌─────────────────────────────────────────────────────────┐
//!   │                 Bus (broadcast channel)                 │
//!   └───────────────────────────┬─────────────────────────────┘
//!                               ▼
//!                     ┌──────────────────┐
//!                     │  SubscriberSet   │──► LogWriter, custom
//!                     └──────────────────┘
//!
//!   join_all(handles) ──► Report (problematic / failed / fine)
//! ```
//!
//! ### Lifecycle
//! ```text
//! submit(task) ──► pending (FIFO) ──► running (≤ limit) ──► settled
//!                                          │
//!                                  completion frees a slot,
//!                                  head of queue is admitted
//! ```
//!
//! ## Guarantees
//! - At no point do more than `concurrency` tasks run simultaneously.
//! - Tasks are admitted in submission order; they complete in whatever
//!   order their I/O finishes.
//! - Each [`Submission`] settles exactly once; one task's failure never
//!   touches another task or the pool.
//! - A concurrency limit of zero is rejected at construction.
//!
//! ## Example
//! ```rust
//! use pkgprobe::{PoolConfig, TaskError, TaskPool};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = TaskPool::new(PoolConfig { concurrency: 3 })?;
//!
//!     let handles: Vec<_> = (0..10)
//!         .map(|i| {
//!             pool.submit(move || async move {
//!                 // any async work: an HTTP probe, a lookup, ...
//!                 Ok::<_, TaskError>(i % 2 == 0)
//!             })
//!         })
//!         .collect();
//!
//!     let outcomes = futures::future::join_all(handles).await;
//!     assert_eq!(outcomes.len(), 10);
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod pool;
mod registry;
mod report;
mod subscribers;

// ---- Public re-exports ----

pub use error::{ConfigError, TaskError};
pub use events::{Bus, Event, EventKind};
pub use pool::{DEFAULT_CONCURRENCY, PoolConfig, Submission, TaskPool};
pub use registry::{
    ListError, PUBLIC_NPM_REGISTRY, Package, PackageStatus, PrivateRegistry, ProbeError,
    RegistryClient, RegistryConfig, list_packages, tarball_url,
};
pub use report::Report;
pub use subscribers::{LogWriter, Subscribe, SubscriberSet};
