// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use futures::stream::StreamExt;
use rheo_core::Delivery;
use std::time::Duration;
use tokio::time::sleep;

/// Collects a merged output to end-of-stream, failing on the first fault.
///
/// Returns the forwarded values in delivery order. A `Delivery::Fault` aborts
/// the drain and becomes the error, so tests assert on either the full value
/// set or the fault, never both.
///
/// # Errors
/// Returns the contained `RheoError` if the stream delivers a fault.
pub async fn drain<S, T>(mut stream: S) -> rheo_core::Result<Vec<T>>
where
    S: Stream<Item = Delivery<T>> + Unpin,
{
    let mut values = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            Delivery::Value(value) => values.push(value),
            Delivery::Fault(fault) => return Err(fault),
        }
    }

    Ok(values)
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!(
                "Unexpected element emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
