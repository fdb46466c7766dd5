//! # The bounded task pool.
//!
//! [`TaskPool`] accepts asynchronously-submitted units of work, runs at most
//! `concurrency` of them at a time, and reports each task's outcome through
//! its own [`Submission`] handle.
//!
//! ## High-level architecture
//! ```text
//!  submit(f) ──► pending queue (FIFO) ──► admission ──► tokio::spawn(slot)
//!      │                                     ▲                 │
//!      └── Submission<R> ◄── oneshot ────────┼─────────────────┤
//!                                            └── completion ───┘
//!                                          (running -= 1, re-admit)
//! ```
//!
//! ## Rules
//! - Admission order is strictly FIFO; completion order is unconstrained.
//! - `running` never exceeds the configured limit.
//! - A task's failure (or panic) reaches only that task's handle; queued and
//!   future tasks are admitted normally.
//! - No cancellation, no timeouts, no retry. Callers wanting a "batch done"
//!   signal aggregate their handles (e.g. `futures::future::join_all`).
//!
//! ## Locking
//! The pending queue and running counter share one mutex. Every critical
//! section is a short straight-line block, never held across an `.await`,
//! so a completion re-invoking admission while a submission is mid-flight
//! cannot double-admit past the limit or lose a queued task.

use std::any::Any;
use std::collections::VecDeque;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::oneshot;

use crate::error::{ConfigError, TaskError};

use super::config::PoolConfig;
use super::handle::Submission;

/// A queued unit of work, type-erased: invoking it creates the task's future
/// with result routing to the caller's handle already wired in.
type QueuedTask = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send + 'static>;

/// Bounded-concurrency task pool.
///
/// Cloning is cheap and every clone submits into the same queue. The pool
/// holds no state of its own once the last task completes and can be reused
/// for further submissions indefinitely.
///
/// ## Example
/// ```
/// use pkgprobe::{PoolConfig, TaskError, TaskPool};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = TaskPool::new(PoolConfig { concurrency: 2 })?;
///
///     let handles: Vec<_> = (0..5)
///         .map(|i| pool.submit(move || async move { Ok::<_, TaskError>(i * 2) }))
///         .collect();
///
///     for (i, handle) in handles.into_iter().enumerate() {
///         assert_eq!(handle.await?, i * 2);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TaskPool {
    shared: Arc<Shared>,
}

struct Shared {
    /// Concurrency ceiling, immutable for the pool's lifetime.
    limit: usize,
    /// Pending queue and running counter, mutated only under this lock.
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    pending: VecDeque<QueuedTask>,
    running: usize,
}

impl TaskPool {
    /// Creates a pool with the given configuration.
    ///
    /// Fails with [`ConfigError::ZeroConcurrency`] when the limit is zero;
    /// a zero-limit pool would queue every submission forever.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shared: Arc::new(Shared {
                limit: config.concurrency,
                state: Mutex::new(State::default()),
            }),
        })
    }

    /// Returns the concurrency limit this pool was built with.
    pub fn concurrency(&self) -> usize {
        self.shared.limit
    }

    /// Submits a task and returns its result handle immediately.
    ///
    /// The closure is invoked when the task is admitted, not at submission;
    /// with a limit of 1, closures run strictly in submission order. The
    /// returned [`Submission`] resolves once, with the task's success value,
    /// its error, or [`TaskError::Panicked`] if the task panicked.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit<F, Fut, R>(&self, task: F) -> Submission<R>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<R, TaskError>> + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        let job: QueuedTask = Box::new(move || {
            async move {
                // Creation and execution both run inside the unwind guard,
                // so a panicking closure still settles its handle.
                let outcome = match AssertUnwindSafe(async move { task().await })
                    .catch_unwind()
                    .await
                {
                    Ok(result) => result,
                    Err(panic) => Err(TaskError::Panicked {
                        message: panic_message(panic.as_ref()),
                    }),
                };
                let _ = tx.send(outcome);
            }
            .boxed()
        });

        self.shared.lock_state().pending.push_back(job);
        self.shared.admit();
        Submission::new(rx)
    }
}

impl Shared {
    /// Admission routine: moves queued tasks into the running state while
    /// capacity remains. Invoked after every submission and every completion.
    fn admit(self: &Arc<Self>) {
        loop {
            let job = {
                let mut state = self.lock_state();
                if state.running >= self.limit {
                    return;
                }
                match state.pending.pop_front() {
                    Some(job) => {
                        state.running += 1;
                        job
                    }
                    None => return,
                }
            };

            let shared = Arc::clone(self);
            tokio::spawn(async move {
                job().await;
                shared.lock_state().running -= 1;
                shared.admit();
            });
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        // Critical sections are panic-free, so poisoning is unreachable;
        // recover the guard instead of propagating a meaningless error.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Extracts a readable message from a caught panic payload.
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = match TaskPool::new(PoolConfig { concurrency: 0 }) {
            Err(err) => err,
            Ok(_) => panic!("expected construction to fail"),
        };
        assert!(matches!(err, ConfigError::ZeroConcurrency));
    }

    #[tokio::test]
    async fn outcome_reaches_the_right_handle() {
        let pool = TaskPool::new(PoolConfig::default()).unwrap();

        let ok = pool.submit(|| async { Ok::<_, TaskError>(42) });
        let err = pool.submit(|| async { Err::<i32, _>(TaskError::fail("boom")) });

        assert_eq!(ok.await.unwrap(), 42);
        let failure = err.await.unwrap_err();
        assert_eq!(failure.as_label(), "task_failed");
    }

    #[tokio::test]
    async fn panicking_task_settles_its_handle() {
        let pool = TaskPool::new(PoolConfig { concurrency: 1 }).unwrap();

        let poisoned = pool.submit(|| async { panic!("kaboom") });
        let after: Submission<u8> = pool.submit(|| async { Ok(7) });

        let failure: Result<(), _> = poisoned.await;
        assert!(matches!(failure, Err(TaskError::Panicked { .. })));
        // The slot freed by the panic admits the next task.
        assert_eq!(after.await.unwrap(), 7);
    }
}
