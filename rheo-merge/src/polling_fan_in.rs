// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

use rheo_core::Delivery;

/// Single-coordinator fan-in that scans its sources on every poll.
///
/// Each `poll_next` makes one non-suspending read attempt per still-open
/// source, starting at a cursor that advances past the last source that
/// produced, so a fast source cannot starve the others. A source that returns
/// end-of-stream is marked closed and never touched again; once every source
/// is closed the output closes. Between productive polls the coordinator
/// parks on the sources' wakers rather than spinning.
///
/// All coordination runs on the consumer's task: no tasks are spawned, and
/// items surface only while the consumer polls. Items are always
/// [`Delivery::Value`]; this strategy has no forwarding tasks whose death
/// could surface as a [`Delivery::Fault`], and a panicking source unwinds
/// straight into the consumer.
pub struct PollingFanIn<T> {
    sources: Vec<Pin<Box<dyn Stream<Item = T> + Send>>>,
    closed: Vec<bool>,
    open: usize,
    cursor: usize,
}

impl<T> PollingFanIn<T>
where
    T: Send + 'static,
{
    #[must_use]
    pub fn new<S>(sources: Vec<S>) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let count = sources.len();
        let sources = sources
            .into_iter()
            .map(|source| Box::pin(source) as Pin<Box<dyn Stream<Item = T> + Send>>)
            .collect::<Vec<_>>();

        Self {
            sources,
            closed: vec![false; count],
            open: count,
            cursor: 0,
        }
    }
}

impl<T> Stream for PollingFanIn<T>
where
    T: Send + 'static,
{
    type Item = Delivery<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.open == 0 {
            return Poll::Ready(None);
        }

        // One read attempt per still-open source, beginning at the fairness
        // cursor. Every open source that stays Pending registers the waker
        // during this pass, so returning Pending afterwards loses no wakeup.
        let count = this.sources.len();

        for offset in 0..count {
            let index = (this.cursor + offset) % count;
            if this.closed[index] {
                continue;
            }

            match this.sources[index].as_mut().poll_next(cx) {
                Poll::Ready(Some(value)) => {
                    this.cursor = (index + 1) % count;
                    return Poll::Ready(Some(Delivery::Value(value)));
                }
                Poll::Ready(None) => {
                    this.closed[index] = true;
                    this.open -= 1;
                }
                Poll::Pending => {}
            }
        }

        if this.open == 0 {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }
}
