// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Spawned synthetic producers for fan-in tests.
//!
//! Each producer runs on its own task and closes its stream by dropping the
//! sender, so tests exercise the same close-by-producer behavior a real
//! source exhibits.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Emits `value` once per `interval`, `count` times, then closes.
///
/// The first value arrives after one full interval, matching a source that is
/// never immediately ready. Producing stops early if the stream is dropped.
///
/// # Example
///
/// ```rust
/// use rheo_test_utils::repeat_producer;
/// use futures::StreamExt;
/// use std::time::Duration;
///
/// # async fn example() {
/// let producer = repeat_producer(7, 3, Duration::from_millis(5));
/// let values: Vec<i32> = producer.collect().await;
/// assert_eq!(values, vec![7, 7, 7]);
/// # }
/// ```
pub fn repeat_producer<T>(value: T, count: usize, interval: Duration) -> UnboundedReceiverStream<T>
where
    T: Clone + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for _ in 0..count {
            sleep(interval).await;
            if tx.send(value.clone()).is_err() {
                break; // Stop if the receiver is dropped
            }
        }
    });

    UnboundedReceiverStream::new(rx)
}

/// Emits the prepared `values` in order with seeded random gaps, then closes.
///
/// Gaps are uniform in `0..=max_interval`. The same seed reproduces the same
/// timing, keeping soak tests deterministic across runs.
pub fn jitter_producer<T>(
    values: Vec<T>,
    max_interval: Duration,
    seed: u64,
) -> UnboundedReceiverStream<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut rng = fastrand::Rng::with_seed(seed);
        let max_millis = max_interval.as_millis() as u64;

        for value in values {
            sleep(Duration::from_millis(rng.u64(0..=max_millis))).await;
            if tx.send(value).is_err() {
                break; // Stop if the receiver is dropped
            }
        }
    });

    UnboundedReceiverStream::new(rx)
}
