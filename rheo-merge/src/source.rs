// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience conversions from tokio channels into fan-in sources.

use futures::Stream;
use tokio::sync::mpsc::{Receiver, UnboundedReceiver};
use tokio_stream::wrappers::{ReceiverStream, UnboundedReceiverStream};

/// Extension trait to use tokio channel receivers as fan-in sources.
///
/// Producer tasks typically own the sending half of a channel and close the
/// source by dropping it; the receiving half becomes the stream handed to the
/// merge.
pub trait ReceiverSourceExt<T> {
    /// The stream type this receiver turns into.
    type Source: Stream<Item = T> + Send;

    /// Converts this receiver into a fan-in source.
    ///
    /// The source ends once the channel is closed and fully drained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rheo_merge::{FanInExt, ReceiverSourceExt};
    /// use tokio::sync::mpsc;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (tx, rx) = mpsc::unbounded_channel::<i32>();
    /// let merged = vec![rx.into_source()].fan_in();
    /// # drop(tx);
    /// # drop(merged);
    /// # }
    /// ```
    fn into_source(self) -> Self::Source;
}

impl<T: Send + 'static> ReceiverSourceExt<T> for UnboundedReceiver<T> {
    type Source = UnboundedReceiverStream<T>;

    fn into_source(self) -> Self::Source {
        UnboundedReceiverStream::new(self)
    }
}

impl<T: Send + 'static> ReceiverSourceExt<T> for Receiver<T> {
    type Source = ReceiverStream<T>;

    fn into_source(self) -> Self::Source {
        ReceiverStream::new(self)
    }
}
