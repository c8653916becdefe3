use lazy_stream::stream::{map, primes};
use lazy_stream::{run_sequential, run_threaded, StreamError};
use std::sync::atomic::{AtomicUsize, Ordering};

fn format_primes() -> Vec<String> {
    map(|x| format!("_{}_", x), primes().with_max(5)).collect()
}

#[test]
fn test_run_sequential_counts_calls() {
    let mut runs = 0;
    let timing = run_sequential(
        || {
            assert_eq!(format_primes().len(), 5);
            runs += 1;
        },
        200,
    );
    assert_eq!(runs, 200);
    assert_eq!(timing.calls, 200);
    assert_eq!(timing.threads, 1);
}

#[test]
fn test_run_threaded_runs_every_thread() {
    let runs = AtomicUsize::new(0);
    let timing = run_threaded(
        || {
            assert_eq!(format_primes(), vec!["_2_", "_3_", "_5_", "_7_", "_11_"]);
            runs.fetch_add(1, Ordering::Relaxed);
        },
        100,
        2,
    )
    .unwrap();
    assert_eq!(runs.load(Ordering::Relaxed), 200);
    assert_eq!(timing.calls, 200);
    assert_eq!(timing.threads, 2);
    assert!(timing.calls_per_sec() >= 0.0);
}

#[test]
fn test_run_threaded_rejects_zero_threads() {
    let err = run_threaded(|| {}, 10, 0).unwrap_err();
    assert!(matches!(err, StreamError::InvalidConfig(_)));
}

#[test]
fn test_run_threaded_reports_panics() {
    let err = run_threaded(|| panic!("worker failure"), 1, 2).unwrap_err();
    assert!(matches!(err, StreamError::ThreadPanicked(0)));
}
