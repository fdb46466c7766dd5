//! # Example: bounded_pool
//!
//! Minimal example of the bounded task pool on its own: submit more tasks
//! than the limit allows and watch slots being recycled.
//!
//! Demonstrates how to:
//! - Create a [`TaskPool`] with an explicit concurrency limit.
//! - Submit closures producing async work.
//! - Await each [`Submission`] handle for its individual outcome.
//!
//! ## Flow
//! ```text
//! submit x5 ──► pending queue ──► 2 slots running
//!                  │                    │
//!                  └──── admission ◄────┘ (completion frees a slot)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example bounded_pool
//! ```

use std::time::Duration;

use pkgprobe::{PoolConfig, TaskError, TaskPool};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Two tasks at a time, no matter how many are submitted
    let pool = TaskPool::new(PoolConfig { concurrency: 2 })?;

    // 2. Five tasks with distinguishable durations; task 3 fails
    let handles: Vec<_> = (1..=5u64)
        .map(|i| {
            pool.submit(move || async move {
                println!("[task {i}] started");
                tokio::time::sleep(Duration::from_millis(100 * i)).await;
                if i == 3 {
                    return Err(TaskError::fail("simulated failure"));
                }
                println!("[task {i}] done");
                Ok(i)
            })
        })
        .collect();

    // 3. Each handle settles independently, in completion order internally,
    //    but we collect them in submission order here
    for (i, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(value) => println!("task {} resolved: {value}", i + 1),
            Err(err) => println!("task {} rejected: {err}", i + 1),
        }
    }

    Ok(())
}
