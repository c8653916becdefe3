//! Lazy combinators: map, filter, zip_with, prefix_reduce.
//!
//! Every combinator owns its upstream(s) and drives them only through
//! [`Pull::pop_next`], one upstream pull per consumed element. The first
//! upstream `None` ends the combinator for good; after that it never pulls
//! again.

use super::core::{PopN, Pull};
use super::interop::IntoAsync;

// ================================
// Map
// ================================

#[must_use = "combinators are lazy and do nothing unless pulled"]
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
    done: bool,
}

impl<S, U, F> Pull for Map<S, F>
where
    S: Pull,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pop_next(&mut self) -> Option<U> {
        if self.done {
            return None;
        }
        match self.source.pop_next() {
            Some(item) => Some((self.f)(item)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.source.remaining_hint()
        }
    }
}

// ================================
// Filter
// ================================

#[must_use = "combinators are lazy and do nothing unless pulled"]
#[derive(Debug, Clone)]
pub struct Filter<S, F> {
    source: S,
    f: F,
    done: bool,
}

impl<S, F> Pull for Filter<S, F>
where
    S: Pull,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pop_next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.pop_next() {
                Some(item) => {
                    if (self.f)(&item) {
                        return Some(item);
                    }
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.remaining_hint().1)
        }
    }
}

// ================================
// ZipWith
// ================================

#[must_use = "combinators are lazy and do nothing unless pulled"]
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    a: A,
    b: B,
    f: F,
    done: bool,
}

impl<A, B, U, F> Pull for ZipWith<A, B, F>
where
    A: Pull,
    B: Pull,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    fn pop_next(&mut self) -> Option<U> {
        if self.done {
            return None;
        }
        // `b` is left untouched when `a` is already exhausted
        let pair = match self.a.pop_next() {
            Some(left) => self.b.pop_next().map(|right| (left, right)),
            None => None,
        };
        match pair {
            Some((left, right)) => Some((self.f)(left, right)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let (a_lower, a_upper) = self.a.remaining_hint();
            let (b_lower, b_upper) = self.b.remaining_hint();
            let upper = match (a_upper, b_upper) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (upper, None) | (None, upper) => upper,
            };
            (a_lower.min(b_lower), upper)
        }
    }
}

// ================================
// PrefixReduce
// ================================

/// Yields every intermediate fold state, one per upstream element.
#[must_use = "combinators are lazy and do nothing unless pulled"]
#[derive(Debug, Clone)]
pub struct PrefixReduce<S, B, F> {
    source: S,
    acc: Option<B>,
    f: F,
    done: bool,
}

impl<S, B, F> Pull for PrefixReduce<S, B, F>
where
    S: Pull,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    type Item = B;

    fn pop_next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        match self.source.pop_next() {
            Some(item) => {
                let acc = self.acc.take()?;
                let next = (self.f)(acc, item);
                self.acc = Some(next.clone());
                Some(next)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.source.remaining_hint()
        }
    }
}

macro_rules! impl_iterator_via_pull {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> Iterator for $name<$($param),+>
        where
            Self: Pull,
        {
            type Item = <Self as Pull>::Item;

            fn next(&mut self) -> Option<Self::Item> {
                self.pop_next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.remaining_hint()
            }
        }

        impl<$($param),+> std::iter::FusedIterator for $name<$($param),+> where Self: Pull {}
    };
}

impl_iterator_via_pull!(Map<S, F>);
impl_iterator_via_pull!(Filter<S, F>);
impl_iterator_via_pull!(ZipWith<A, B, F>);
impl_iterator_via_pull!(PrefixReduce<S, B, F>);

// ================================
// Free functions
// ================================

/// `f(x)` for every upstream element `x`, in order
pub fn map<S, U, F>(f: F, stream: S) -> Map<S, F>
where
    S: Pull,
    F: FnMut(S::Item) -> U,
{
    Map { source: stream, f, done: false }
}

/// Upstream elements for which `f` holds; the rest are pulled and dropped
pub fn filter<S, F>(f: F, stream: S) -> Filter<S, F>
where
    S: Pull,
    F: FnMut(&S::Item) -> bool,
{
    Filter { source: stream, f, done: false }
}

/// `f(a, b)` over pairs pulled in lockstep; the shorter input sets the length
pub fn zip_with<A, B, U, F>(f: F, stream_a: A, stream_b: B) -> ZipWith<A, B, F>
where
    A: Pull,
    B: Pull,
    F: FnMut(A::Item, B::Item) -> U,
{
    ZipWith { a: stream_a, b: stream_b, f, done: false }
}

/// Running fold: the k-th output is `f` folded over `init` and the first k
/// upstream elements.
pub fn prefix_reduce<S, B, F>(f: F, stream: S, init: B) -> PrefixReduce<S, B, F>
where
    S: Pull,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    PrefixReduce { source: stream, acc: Some(init), f, done: false }
}

// ================================
// Extension trait
// ================================

/// Method-style access to the combinators for any [`Pull`] source.
///
/// Names carry a `_pull` suffix where they would otherwise collide with
/// `Iterator` methods on the same types.
pub trait PullExt: Pull + Sized {
    fn map_pull<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        map(f, self)
    }

    fn filter_pull<F>(self, f: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        filter(f, self)
    }

    fn zip_with<B, U, F>(self, other: B, f: F) -> ZipWith<Self, B, F>
    where
        B: Pull,
        F: FnMut(Self::Item, B::Item) -> U,
    {
        zip_with(f, self, other)
    }

    fn prefix_reduce<B, F>(self, init: B, f: F) -> PrefixReduce<Self, B, F>
    where
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        prefix_reduce(f, self, init)
    }

    /// Lazily pull up to `n` elements, ending early on exhaustion
    fn pop_n(&mut self, n: usize) -> PopN<'_, Self> {
        PopN::new(self, n)
    }

    /// Pull everything that is left into a `Vec`
    fn collect_vec(mut self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        while let Some(item) = self.pop_next() {
            items.push(item);
        }
        items
    }

    /// Expose this source as an always-ready `futures_core::Stream`
    fn into_async(self) -> IntoAsync<Self> {
        IntoAsync::new(self)
    }
}

impl<P: Pull> PullExt for P {}
