// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;

use crate::polling_fan_in::PollingFanIn;
use crate::spawned_fan_in::SpawnedFanIn;

/// Extension trait for merging a vector of independent streams into one output.
///
/// Both strategies deliver every source value exactly once, preserve each
/// source's internal order, and close once all sources have closed. Merging an
/// empty vector yields an output that closes immediately.
pub trait FanInExt {
    type Item;

    /// Merges the streams with one forwarding task per source.
    ///
    /// Sources make progress concurrently and a source that panics surfaces
    /// as a trailing [`Delivery::Fault`](rheo_core::Delivery::Fault) instead
    /// of wedging the output. Must be called from within a Tokio runtime.
    fn fan_in(self) -> SpawnedFanIn<Self::Item>;

    /// Merges the streams on the consumer's own task, without spawning.
    ///
    /// Each poll makes one non-suspending read attempt per still-open source.
    /// Nothing runs between polls, and the output never carries a fault.
    fn fan_in_polling(self) -> PollingFanIn<Self::Item>;
}

impl<T, S> FanInExt for Vec<S>
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    fn fan_in(self) -> SpawnedFanIn<Self::Item> {
        SpawnedFanIn::new(self)
    }

    fn fan_in_polling(self) -> PollingFanIn<Self::Item> {
        PollingFanIn::new(self)
    }
}
