// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fault injection for streams.
//!
//! This module provides a stream wrapper that panics mid-stream, for testing
//! how a fan-in surfaces abnormal source termination.

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that panics after yielding a configured number of items.
///
/// Items up to the trigger position pass through untouched; the poll that
/// would produce the next item panics with the configured message instead.
/// This models a source whose forwarding task dies mid-stream rather than
/// reaching end-of-stream.
///
/// # Examples
///
/// ```rust
/// use rheo_test_utils::PanicAfter;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let mut faulty = PanicAfter::new(stream::iter(vec![1, 2, 3]), 2, "source died");
///
/// // The first two items pass through
/// assert_eq!(faulty.next().await, Some(1));
/// assert_eq!(faulty.next().await, Some(2));
///
/// // The next poll panics with "source died"
/// # }
/// ```
#[pin_project]
pub struct PanicAfter<S> {
    #[pin]
    inner: S,
    panic_after: usize,
    yielded: usize,
    message: String,
}

impl<S> PanicAfter<S> {
    /// Creates a wrapper that panics once `panic_after` items have been yielded.
    ///
    /// With `panic_after = 0` the very first poll panics. A wrapped stream
    /// that ends before the trigger position closes normally.
    pub fn new(inner: S, panic_after: usize, message: impl Into<String>) -> Self {
        Self {
            inner,
            panic_after,
            yielded: 0,
            message: message.into(),
        }
    }
}

impl<S> Stream for PanicAfter<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.yielded == *this.panic_after {
            panic!("{}", this.message);
        }

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                *this.yielded += 1;
                Poll::Ready(Some(item))
            }
            other => other,
        }
    }
}
