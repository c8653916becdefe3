//! Generic stream constructors: empty, from_iter, from_fn
use std::marker::PhantomData;

use super::core::{Producer, Stream};

// ================================
// Basic Constructors
// ================================

#[derive(Debug, Clone)]
pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Producer for Empty<T> {
    type Item = T;
    fn produce(&mut self) -> Option<T> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct Iter<I> {
    iter: I,
}

impl<I: Iterator> Producer for Iter<I> {
    type Item = I::Item;
    fn produce(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

// ================================
// Function-based Constructors
// ================================

#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    fn produce(&mut self) -> Option<T> {
        (self.f)()
    }
}

/// A stream that is exhausted from its first pull
pub fn empty<T>() -> Stream<Empty<T>> {
    Stream::new(Empty { _phantom: PhantomData })
}

/// Stream over the elements of any iterable
pub fn from_iter<I>(iter: I) -> Stream<Iter<I::IntoIter>>
where
    I: IntoIterator,
{
    Stream::new(Iter { iter: iter.into_iter() })
}

/// Stream driven by a closure; the closure returning `None` ends it
pub fn from_fn<T, F>(f: F) -> Stream<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Stream::new(FromFn { f })
}
