//! Bridge from the synchronous pull protocol to `futures_core::Stream`.

use std::pin::Pin;
use std::task::{Context, Poll};

use super::core::Pull;

/// Async view over a [`Pull`] source.
///
/// Each poll performs exactly one pull and is always ready, so the adapter
/// never registers a waker.
#[must_use = "streams do nothing unless polled"]
#[derive(Debug)]
pub struct IntoAsync<P> {
    source: P,
}

impl<P: Pull> IntoAsync<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// Recover the underlying pull source
    pub fn into_inner(self) -> P {
        self.source
    }
}

impl<P> futures_core::Stream for IntoAsync<P>
where
    P: Pull + Unpin,
{
    type Item = P::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().source.pop_next())
    }
}
