//! Concurrency-contract tests for the bounded task pool.
//!
//! Timing-sensitive tests run with `start_paused`: the tokio clock advances
//! only when every task is idle, so sleep-based overlap checks are
//! deterministic instead of flaky.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::join_all;
use tokio::time::{Instant, sleep};

use pkgprobe::{ConfigError, PoolConfig, TaskError, TaskPool};

fn pool(concurrency: usize) -> TaskPool {
    TaskPool::new(PoolConfig { concurrency }).expect("valid pool config")
}

#[tokio::test(start_paused = true)]
async fn running_tasks_never_exceed_the_limit() {
    let pool = pool(3);
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let running = Arc::clone(&running);
            let peak = Arc::clone(&peak);
            pool.submit(move || async move {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                sleep(Duration::from_millis(10)).await;
                running.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, TaskError>(())
            })
        })
        .collect();

    join_all(handles).await;

    assert_eq!(peak.load(Ordering::SeqCst), 3, "pool should fill its slots");
    assert_eq!(running.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn every_task_runs_once_and_every_handle_settles() {
    let pool = pool(4);
    let started = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let started = Arc::clone(&started);
            pool.submit(move || async move {
                started.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TaskError>(i)
            })
        })
        .collect();

    let outcomes = join_all(handles).await;

    assert_eq!(started.load(Ordering::SeqCst), 50);
    for (i, outcome) in outcomes.into_iter().enumerate() {
        assert_eq!(outcome.expect("task should succeed"), i);
    }
}

#[tokio::test]
async fn limit_of_one_admits_in_submission_order() {
    let pool = pool(1);
    let order = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let order = Arc::clone(&order);
            pool.submit(move || async move {
                order.lock().unwrap().push(i);
                // Yield mid-task; FIFO admission must still hold.
                tokio::task::yield_now().await;
                Ok::<_, TaskError>(())
            })
        })
        .collect();

    join_all(handles).await;

    let order = order.lock().unwrap();
    assert_eq!(*order, (0..10).collect::<Vec<_>>());
}

#[tokio::test]
async fn one_failure_leaves_the_rest_untouched() {
    let pool = pool(2);

    let handles: Vec<_> = (0..5)
        .map(|i| {
            pool.submit(move || async move {
                if i == 2 {
                    Err(TaskError::fail(format!("boom-{i}")))
                } else {
                    Ok(i)
                }
            })
        })
        .collect();

    let outcomes = join_all(handles).await;

    for (i, outcome) in outcomes.into_iter().enumerate() {
        if i == 2 {
            let err = outcome.expect_err("task 2 should fail");
            assert!(err.to_string().contains("boom-2"), "got: {err}");
        } else {
            assert_eq!(outcome.expect("other tasks should succeed"), i);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn limit_of_one_serializes_durations() {
    let pool = pool(1);
    let begin = Instant::now();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            pool.submit(|| async {
                sleep(Duration::from_millis(50)).await;
                Ok::<_, TaskError>(())
            })
        })
        .collect();

    join_all(handles).await;

    assert!(
        begin.elapsed() >= Duration::from_millis(150),
        "three 50ms tasks must not overlap under limit 1, took {:?}",
        begin.elapsed()
    );
}

#[tokio::test(start_paused = true)]
async fn limit_of_three_overlaps_equal_durations() {
    let pool = pool(3);
    let begin = Instant::now();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            pool.submit(|| async {
                sleep(Duration::from_millis(50)).await;
                Ok::<_, TaskError>(())
            })
        })
        .collect();

    join_all(handles).await;

    let elapsed = begin.elapsed();
    assert!(
        elapsed >= Duration::from_millis(50) && elapsed < Duration::from_millis(100),
        "three 50ms tasks should run together under limit 3, took {elapsed:?}"
    );
}

#[test]
fn zero_concurrency_never_produces_a_pool() {
    let err = match TaskPool::new(PoolConfig { concurrency: 0 }) {
        Err(err) => err,
        Ok(_) => panic!("expected construction to fail"),
    };
    assert!(matches!(err, ConfigError::ZeroConcurrency));
}

/// Five tasks, limit two, the third one fails: the first two start
/// immediately, the third starts only once a slot frees up, all five
/// handles settle, and exactly one settles with an error.
#[tokio::test(start_paused = true)]
async fn five_tasks_limit_two_end_to_end() {
    let pool = pool(2);
    let begin = Instant::now();
    let starts = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let starts = Arc::clone(&starts);
            pool.submit(move || async move {
                starts.lock().unwrap().push((i, begin.elapsed()));
                sleep(Duration::from_millis(50)).await;
                if i == 2 {
                    Err(TaskError::fail("registry unreachable"))
                } else {
                    Ok(true)
                }
            })
        })
        .collect();

    let outcomes = join_all(handles).await;

    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(successes, 4);
    for (i, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => assert!(value, "task {i} should resolve to true"),
            Err(err) => {
                assert_eq!(i, 2, "only task 2 may fail");
                assert!(err.to_string().contains("registry unreachable"));
            }
        }
    }

    let starts = starts.lock().unwrap();
    assert_eq!(starts.len(), 5, "every task must start exactly once");
    assert_eq!(starts[0].1, Duration::ZERO);
    assert_eq!(starts[1].1, Duration::ZERO);
    assert!(
        starts[2].1 >= Duration::from_millis(50),
        "task {} had to wait for a free slot, started at {:?}",
        starts[2].0,
        starts[2].1
    );
}

#[tokio::test]
async fn pool_is_reusable_after_draining() {
    let pool = pool(2);

    let first = pool.submit(|| async { Ok::<_, TaskError>("first") });
    assert_eq!(first.await.unwrap(), "first");

    // No retained state between batches; a fresh submission admits at once.
    let second = pool.submit(|| async { Ok::<_, TaskError>("second") });
    assert_eq!(second.await.unwrap(), "second");
}
