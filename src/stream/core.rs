//! Core pull protocol: the `Producer` and `Pull` traits, the bounded `Stream`,
//! and the `PopN` bulk-pull sequence.

use crate::stream_configuration::StreamConfig;

/// Variant-specific source of raw elements.
///
/// A producer returns `None` once it has nothing more to give. The owning
/// `Stream` never asks it again after that, so implementations do not need
/// to be fused.
pub trait Producer {
    type Item;
    fn produce(&mut self) -> Option<Self::Item>;
}

/// Pull protocol shared by streams and combinator results.
pub trait Pull {
    type Item;

    /// Retrieve the next element, or `None` once the source is exhausted.
    fn pop_next(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of elements left, in `Iterator::size_hint` form
    fn remaining_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<P: Pull + ?Sized> Pull for &mut P {
    type Item = P::Item;

    fn pop_next(&mut self) -> Option<Self::Item> {
        (**self).pop_next()
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        (**self).remaining_hint()
    }
}

impl<P: Pull + ?Sized> Pull for Box<P> {
    type Item = P::Item;

    fn pop_next(&mut self) -> Option<Self::Item> {
        (**self).pop_next()
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        (**self).remaining_hint()
    }
}

/// A single-owner, pull-based lazy sequence with an optional bound.
///
/// `current` counts every pull that got past the bound check, including pulls
/// that found the producer already finished. Once `current` reaches `max`
/// the producer is never invoked again.
///
/// Not `Clone`: a copy taken part-way through would replay the producer from
/// the same position.
#[derive(Debug)]
pub struct Stream<P> {
    current: usize,
    max: Option<usize>,
    producer: P,
    producer_done: bool,
}

impl<P: Producer> Stream<P> {
    /// Wrap a producer in an unbounded stream
    pub fn new(producer: P) -> Self {
        Self {
            current: 0,
            max: None,
            producer,
            producer_done: false,
        }
    }

    /// Wrap a producer in a stream yielding at most `max` elements
    pub fn bounded(producer: P, max: usize) -> Self {
        Self::new(producer).with_max(max)
    }

    /// Cap this stream at `max` elements in total
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Apply the bound from a configuration. An unbounded configuration
    /// keeps whatever bound the stream already has.
    pub fn with_config(mut self, config: &StreamConfig) -> Self {
        if let Some(max) = config.max {
            self.max = Some(max);
        }
        self
    }

    /// Number of pulls that have passed the bound check so far
    pub fn current(&self) -> usize {
        self.current
    }

    /// The configured bound. Named apart from `Iterator::max`.
    pub fn bound(&self) -> Option<usize> {
        self.max
    }

    /// Pulls left before the bound is reached; `None` when unbounded
    pub fn remaining(&self) -> Option<usize> {
        self.max.map(|max| max.saturating_sub(self.current))
    }

    /// True once the bound is reached or the producer has finished
    pub fn is_exhausted(&self) -> bool {
        self.producer_done || self.bound_reached()
    }

    fn bound_reached(&self) -> bool {
        matches!(self.max, Some(max) if self.current >= max)
    }

    /// Retrieve the next element, or `None` if the stream is exhausted.
    pub fn pop_next(&mut self) -> Option<P::Item> {
        if self.bound_reached() {
            log::trace!("Pull rejected: bound of {:?} reached", self.max);
            return None;
        }

        self.current += 1;
        if self.producer_done {
            return None;
        }

        let item = self.producer.produce();
        if item.is_none() {
            log::debug!("Producer exhausted after {} pulls", self.current - 1);
            self.producer_done = true;
        } else if self.bound_reached() {
            log::debug!("Stream reached its bound of {}", self.current);
        }
        item
    }

    /// Lazily pull up to `n` elements. See [`PopN`] for the exhaustion contract.
    pub fn pop_n(&mut self, n: usize) -> PopN<'_, Self> {
        PopN::new(self, n)
    }
}

impl<P: Producer> Pull for Stream<P> {
    type Item = P::Item;

    fn pop_next(&mut self) -> Option<Self::Item> {
        Stream::pop_next(self)
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            (0, self.remaining())
        }
    }
}

impl<P: Producer> Iterator for Stream<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Pull::remaining_hint(self)
    }
}

impl<P: Producer> std::iter::FusedIterator for Stream<P> {}

/// Lazy bulk pull over a borrowed source.
///
/// Exhausted slots are not represented: the sequence performs at most `n`
/// pulls and ends at the first pull that reports exhaustion, so it may be
/// shorter than `n`. Nothing is pulled until the sequence is advanced.
#[must_use = "PopN is lazy and pulls nothing until iterated"]
#[derive(Debug)]
pub struct PopN<'a, S: ?Sized> {
    source: &'a mut S,
    remaining: usize,
}

impl<'a, S: Pull + ?Sized> PopN<'a, S> {
    pub fn new(source: &'a mut S, n: usize) -> Self {
        Self { source, remaining: n }
    }
}

impl<S: Pull + ?Sized> Iterator for PopN<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.pop_next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.source.remaining_hint().1 {
            Some(upper) if self.remaining > 0 => (0, Some(upper.min(self.remaining))),
            _ => (0, Some(self.remaining)),
        }
    }
}

impl<S: Pull + ?Sized> std::iter::FusedIterator for PopN<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Producer for Countdown {
        type Item = u32;

        fn produce(&mut self) -> Option<u32> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0)
        }
    }

    #[test]
    fn test_bound_stops_before_producer() {
        let mut stream = Stream::bounded(Countdown(10), 2);
        assert_eq!(stream.pop_next(), Some(9));
        assert_eq!(stream.pop_next(), Some(8));
        assert_eq!(stream.pop_next(), None);
        assert_eq!(stream.current(), 2);
        assert_eq!(stream.remaining(), Some(0));
    }

    #[test]
    fn test_producer_exhaustion_still_counts_pull() {
        let mut stream = Stream::new(Countdown(1));
        assert_eq!(stream.pop_next(), Some(0));
        assert_eq!(stream.pop_next(), None);
        assert_eq!(stream.current(), 2);
        assert!(stream.is_exhausted());
        assert_eq!(stream.pop_next(), None);
        assert_eq!(stream.current(), 3);
    }

    #[test]
    fn test_zero_bound_is_born_exhausted() {
        let mut stream = Stream::bounded(Countdown(5), 0);
        assert!(stream.is_exhausted());
        assert_eq!(stream.pop_next(), None);
        assert_eq!(stream.current(), 0);
    }

    #[test]
    fn test_pop_n_stops_at_exhaustion() {
        let mut stream = Stream::new(Countdown(3));
        let items: Vec<u32> = stream.pop_n(10).collect();
        assert_eq!(items, vec![2, 1, 0]);
        // three hits plus the one pull that found the producer finished
        assert_eq!(stream.current(), 4);
    }
}
