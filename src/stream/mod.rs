//! Pull-based lazy streams
//!
//! This module provides the bounded `Stream` core, its concrete producers,
//! and the combinators that compose streams without materializing them.

pub mod core;
pub mod constructors;
pub mod producers;
pub mod combinators;
pub mod interop;

// Re-export core types
pub use self::core::{PopN, Producer, Pull, Stream};

// Re-export constructors
pub use constructors::{empty, from_fn, from_iter, Empty, FromFn, Iter};

// Re-export concrete producers
pub use producers::{
    counters, is_prime, lcg_step, prime_factors, primes, randoms, randoms_from_seed,
    randoms_with_config, Counting, PrimeFactors, Primes, PseudoRandom, LCG_INCREMENT,
    LCG_MULTIPLIER,
};

// Re-export combinators
pub use combinators::{
    filter, map, prefix_reduce, zip_with, Filter, Map, PrefixReduce, PullExt, ZipWith,
};

pub use interop::IntoAsync;
