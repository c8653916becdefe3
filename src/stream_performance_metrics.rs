//! Timing helpers for repeated pipeline runs
//!
//! These measure wall-clock time of calling a closure many times, either on
//! the current thread or on several threads at once. Each thread builds and
//! drains its own pipelines; no stream is ever shared between threads.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::{StreamError, StreamResult};

/// Number of calls per thread used when the caller has no preference
pub const DEFAULT_CALLS: usize = 100_000;

/// Wall-clock timing of a batch of calls
#[derive(Debug, Clone, Default)]
pub struct RunTiming {
    /// Total calls across all threads
    pub calls: u64,
    pub threads: usize,
    pub elapsed: Duration,
}

impl RunTiming {
    pub fn calls_per_sec(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.calls as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Call `f` `calls` times on the current thread
pub fn run_sequential<F>(mut f: F, calls: usize) -> RunTiming
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..calls {
        f();
    }
    let timing = RunTiming {
        calls: calls as u64,
        threads: 1,
        elapsed: start.elapsed(),
    };
    log::debug!("Sequential run finished: {:?}", timing);
    timing
}

fn total_calls(calls: usize, threads: usize) -> u64 {
    (calls as u64).saturating_mul(threads as u64)
}

/// Call `f` `calls` times on each of `threads` scoped threads, all started
/// together. The elapsed time covers the slowest thread.
pub fn run_threaded<F>(f: F, calls: usize, threads: usize) -> StreamResult<RunTiming>
where
    F: Fn() + Sync,
{
    if threads == 0 {
        return Err(StreamError::InvalidConfig(
            "run_threaded needs at least one thread".to_string(),
        ));
    }

    let f = &f;
    let start = Instant::now();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || {
                    for _ in 0..calls {
                        f();
                    }
                })
            })
            .collect();

        // join every worker so the scope never sees an unjoined panic
        let mut outcome = Ok(());
        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                log::warn!("Timing worker {} panicked", index);
                if outcome.is_ok() {
                    outcome = Err(StreamError::ThreadPanicked(index));
                }
            }
        }
        outcome
    })?;

    let timing = RunTiming {
        calls: total_calls(calls, threads),
        threads,
        elapsed: start.elapsed(),
    };
    log::debug!("Threaded run finished: {:?}", timing);
    Ok(timing)
}
