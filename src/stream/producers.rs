//! Concrete generators: counting, pseudo-random, prime and prime-factor
//! producers, with constructors returning ready-to-pull streams.

use super::core::{Producer, Stream};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::StreamConfig;

// ================================
// Counting
// ================================

/// Yields `start`, `start + 1`, ... until `i64::MAX`.
#[derive(Debug, Clone)]
pub struct Counting {
    next: Option<i64>,
}

impl Counting {
    pub fn new(start: i64) -> Self {
        Self { next: Some(start) }
    }
}

impl Producer for Counting {
    type Item = i64;

    fn produce(&mut self) -> Option<i64> {
        let value = self.next?;
        self.next = value.checked_add(1);
        if self.next.is_none() {
            log::warn!("Counting producer reached i64::MAX, ending sequence");
        }
        Some(value)
    }
}

/// Unbounded counting stream starting at `start`
pub fn counters(start: i64) -> Stream<Counting> {
    Stream::new(Counting::new(start))
}

// ================================
// Pseudo-random
// ================================

pub const LCG_MULTIPLIER: u64 = 6364136223846793005;

/// Increment of the linear congruential step, kept at `2 * 32` (= 64).
///
/// A well-formed LCG would use a large odd increment. With this one every
/// output is a multiple of 64, so the low six bits carry no randomness. The
/// period on the remaining 58 bits is still full, so there are no repeats in
/// short runs.
pub const LCG_INCREMENT: u64 = 2 * 32;

/// One LCG step: `(LCG_MULTIPLIER * seed + LCG_INCREMENT) mod 2^64`
pub fn lcg_step(seed: u64) -> u64 {
    LCG_MULTIPLIER.wrapping_mul(seed).wrapping_add(LCG_INCREMENT)
}

/// Linear congruential generator. Each output re-seeds the next step.
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Default for PseudoRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Producer for PseudoRandom {
    type Item = u64;

    fn produce(&mut self) -> Option<u64> {
        self.state = lcg_step(self.state);
        Some(self.state)
    }
}

/// Unbounded pseudo-random stream seeded with 0; the first value is 64
pub fn randoms() -> Stream<PseudoRandom> {
    Stream::new(PseudoRandom::default())
}

pub fn randoms_from_seed(seed: u64) -> Stream<PseudoRandom> {
    Stream::new(PseudoRandom::new(seed))
}

/// Pseudo-random stream taking both seed and bound from `config`
pub fn randoms_with_config(config: &StreamConfig) -> Stream<PseudoRandom> {
    randoms_from_seed(config.seed).with_config(config)
}

// ================================
// Primes
// ================================

/// Trial division by every integer in `[2, n)`.
///
/// Deliberately linear per candidate; callers producing many primes pay a
/// quadratic total.
pub fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

/// Primes in increasing order starting at 2
#[derive(Debug, Clone)]
pub struct Primes {
    candidate: Option<u64>,
}

impl Default for Primes {
    fn default() -> Self {
        Self { candidate: Some(2) }
    }
}

impl Producer for Primes {
    type Item = u64;

    fn produce(&mut self) -> Option<u64> {
        let mut candidate = self.candidate?;
        while !is_prime(candidate) {
            candidate = match candidate.checked_add(1) {
                Some(next) => next,
                None => {
                    log::warn!("Prime producer ran out of u64 candidates");
                    self.candidate = None;
                    return None;
                }
            };
        }
        self.candidate = candidate.checked_add(1);
        Some(candidate)
    }
}

/// Unbounded stream of primes
pub fn primes() -> Stream<Primes> {
    Stream::new(Primes::default())
}

// ================================
// Prime factors
// ================================

/// Prime factors of a target, smallest first, with multiplicity.
///
/// Owns the partially reduced value; each pull divides out one factor.
#[derive(Debug, Clone)]
pub struct PrimeFactors {
    remaining: u64,
    divisor: u64,
}

impl PrimeFactors {
    pub fn new(target: i64) -> StreamResult<Self> {
        if target <= 0 {
            return Err(StreamError::NonPositiveTarget(target));
        }
        if target == 1 {
            log::debug!("Prime factors of 1 requested, stream will be empty");
        }
        Ok(Self {
            remaining: target as u64,
            divisor: 2,
        })
    }

    /// The part of the target not yet divided out
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Producer for PrimeFactors {
    type Item = u64;

    fn produce(&mut self) -> Option<u64> {
        while self.divisor <= self.remaining {
            if self.remaining % self.divisor == 0 {
                self.remaining /= self.divisor;
                return Some(self.divisor);
            }
            self.divisor += 1;
        }
        None
    }
}

/// Stream of the prime factors of `target`. Fails for `target <= 0`.
pub fn prime_factors(target: i64) -> StreamResult<Stream<PrimeFactors>> {
    Ok(Stream::new(PrimeFactors::new(target)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_first_steps() {
        assert_eq!(lcg_step(0), 64);
        assert_eq!(lcg_step(64), LCG_MULTIPLIER.wrapping_mul(64).wrapping_add(64));
    }

    #[test]
    fn test_is_prime_small_values() {
        let found: Vec<u64> = (0..20).filter(|&n| is_prime(n)).collect();
        assert_eq!(found, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn test_counting_ends_at_i64_max() {
        let mut producer = Counting::new(i64::MAX - 1);
        assert_eq!(producer.produce(), Some(i64::MAX - 1));
        assert_eq!(producer.produce(), Some(i64::MAX));
        assert_eq!(producer.produce(), None);
    }

    #[test]
    fn test_prime_factors_tracks_remaining() {
        let mut producer = PrimeFactors::new(12).unwrap();
        assert_eq!(producer.produce(), Some(2));
        assert_eq!(producer.remaining(), 6);
        assert_eq!(producer.produce(), Some(2));
        assert_eq!(producer.produce(), Some(3));
        assert_eq!(producer.remaining(), 1);
        assert_eq!(producer.produce(), None);
    }
}
