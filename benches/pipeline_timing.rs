use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_stream::stream::{counters, filter, map, prefix_reduce, primes, randoms, zip_with};
use lazy_stream::{run_sequential, run_threaded};
use std::time::Duration;

fn format_primes() -> Vec<String> {
    map(|x| format!("_{}_", x), primes().with_max(5)).collect()
}

fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators");

    for size in [10usize, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::new("primes_map", size), size, |b, &size| {
            b.iter(|| {
                let result: Vec<u64> = map(|x| black_box(x * 2), primes().with_max(size)).collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("randoms_filter", size), size, |b, &size| {
            b.iter(|| {
                let result: Vec<u64> =
                    filter(|x| black_box(x % 3 == 0), randoms().with_max(size)).collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("zip_prefix_reduce", size), size, |b, &size| {
            b.iter(|| {
                let zipped = zip_with(|a, b| a as i64 * b, primes().with_max(size), counters(1));
                let result: Vec<i64> = prefix_reduce(|acc, x| acc + x, zipped, 0).collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_sequential_vs_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_vs_threaded");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("sequential", |b| {
        b.iter_custom(|iters| {
            run_sequential(|| {
                black_box(format_primes());
            }, (iters * 2) as usize)
            .elapsed
        });
    });

    group.bench_function("two_threads", |b| {
        b.iter_custom(|iters| {
            match run_threaded(|| {
                black_box(format_primes());
            }, iters as usize, 2) {
                Ok(timing) => timing.elapsed,
                Err(e) => panic!("threaded run failed: {}", e),
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_combinators, bench_sequential_vs_threaded);
criterion_main!(benches);
