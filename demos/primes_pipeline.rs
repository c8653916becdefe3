use lazy_stream::stream::{counters, prime_factors, primes, randoms, PullExt};
use lazy_stream::StreamResult;

fn main() -> StreamResult<()> {
    // Label the first five primes with their position
    let labelled = primes()
        .with_max(5)
        .zip_with(counters(1), |p, i| format!("#{}: {}", i, p))
        .collect_vec();
    println!("Primes: {:?}", labelled);

    // Factor a number one pull at a time
    let mut factors = prime_factors(255)?;
    while let Some(factor) = factors.pop_next() {
        println!("factor of 255: {}", factor);
    }

    // Running sum of a few pseudo-random values, reduced to keep them readable
    let sums = randoms()
        .with_max(4)
        .map_pull(|r| r % 1_000)
        .prefix_reduce(0u64, |acc, r| acc + r)
        .collect_vec();
    println!("Running sums: {:?}", sums);

    Ok(())
}
