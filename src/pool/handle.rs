//! # Per-submission result handle.
//!
//! [`Submission`] is the caller-visible future for one submitted task. It
//! resolves exactly once with the task's outcome, whenever the task happens
//! to finish; handles of concurrently running tasks resolve in completion
//! order, not submission order.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::TaskError;

/// Future resolving to the outcome of one submitted task.
///
/// Returned by [`TaskPool::submit`](crate::TaskPool::submit). Dropping the
/// handle does not cancel the task; it keeps running to completion and its
/// outcome is discarded.
pub struct Submission<R> {
    rx: oneshot::Receiver<Result<R, TaskError>>,
}

impl<R> Submission<R> {
    pub(super) fn new(rx: oneshot::Receiver<Result<R, TaskError>>) -> Self {
        Self { rx }
    }
}

impl<R> Future for Submission<R> {
    type Output = Result<R, TaskError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The pool sends exactly one outcome per task, panics included;
            // a dropped sender means the runtime shut down under the task.
            Poll::Ready(Err(_)) => Poll::Ready(Err(TaskError::fail(
                "task dropped before completion",
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}
