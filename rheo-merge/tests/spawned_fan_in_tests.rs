// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream, StreamExt};
use rheo_core::{Delivery, RheoError};
use rheo_merge::FanInExt;
use rheo_test_utils::PanicAfter;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

type BoxedSource = Pin<Box<dyn Stream<Item = i32> + Send>>;

#[tokio::test]
async fn test_panicking_source_surfaces_fault_after_healthy_values() -> anyhow::Result<()> {
    // Arrange: source 1 dies after yielding one value; source 0 stays healthy
    let healthy: BoxedSource = Box::pin(stream::iter(vec![1, 2, 3]));
    let faulty: BoxedSource = Box::pin(PanicAfter::new(
        stream::iter(vec![10, 20]),
        1,
        "forwarder died",
    ));

    // Act
    let deliveries: Vec<Delivery<i32>> = vec![healthy, faulty].fan_in().collect().await;

    // Assert
    let (values, faults): (Vec<_>, Vec<_>) = deliveries.into_iter().partition(Delivery::is_value);

    let mut forwarded: Vec<i32> = values.into_iter().map(Delivery::unwrap).collect();
    forwarded.sort_unstable();
    assert_eq!(
        forwarded,
        vec![1, 2, 3, 10],
        "Healthy values should be delivered despite the faulted source"
    );

    assert_eq!(faults.len(), 1, "Exactly one fault notice should be delivered");
    match faults[0].clone().fault() {
        Some(RheoError::SourcePanicked { index, message }) => {
            assert_eq!(index, 1, "The fault should name the faulted source");
            assert_eq!(message, "forwarder died", "The panic text should be recovered");
        }
        other => panic!("expected SourcePanicked, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_fault_notice_is_delivered_last() -> anyhow::Result<()> {
    // Arrange
    let healthy: BoxedSource = Box::pin(stream::iter(vec![1, 2, 3, 4]));
    let faulty: BoxedSource = Box::pin(PanicAfter::new(stream::iter(vec![10]), 0, "early death"));

    // Act
    let deliveries: Vec<Delivery<i32>> = vec![healthy, faulty].fan_in().collect().await;

    // Assert
    let last = deliveries.last().expect("the output cannot be empty");
    assert!(
        last.is_fault(),
        "The fault notice should come after every forwarded value"
    );
    assert!(
        deliveries[..deliveries.len() - 1].iter().all(Delivery::is_value),
        "Only the trailing delivery should be a fault"
    );

    Ok(())
}

#[tokio::test]
async fn test_two_panicking_sources_aggregate_into_one_fault() -> anyhow::Result<()> {
    // Arrange
    let faulty_a: BoxedSource = Box::pin(PanicAfter::new(stream::iter(vec![1]), 0, "first"));
    let healthy: BoxedSource = Box::pin(stream::iter(vec![2]));
    let faulty_b: BoxedSource = Box::pin(PanicAfter::new(stream::iter(vec![3]), 0, "second"));

    // Act
    let deliveries: Vec<Delivery<i32>> =
        vec![faulty_a, healthy, faulty_b].fan_in().collect().await;

    // Assert
    let faults: Vec<_> = deliveries
        .into_iter()
        .filter_map(Delivery::fault)
        .collect();
    assert_eq!(faults.len(), 1, "Faults should aggregate into a single notice");

    match &faults[0] {
        RheoError::FaultedSources { count, faults } => {
            assert_eq!(*count, 2, "Both faulted sources should be counted");
            let indices: Vec<_> = faults.iter().map(RheoError::source_index).collect();
            assert_eq!(
                indices,
                vec![Some(0), Some(2)],
                "Faults should be attributed in source order"
            );
        }
        other => panic!("expected FaultedSources, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_bounded_handoff_keeps_forwarder_behind_consumer() -> anyhow::Result<()> {
    // Arrange: count how far the forwarder has read into the source
    let pulled = Arc::new(AtomicUsize::new(0));
    let counting = {
        let pulled = Arc::clone(&pulled);
        stream::iter(0..100).inspect(move |_| {
            pulled.fetch_add(1, Ordering::SeqCst);
        })
    };

    let mut merged = vec![counting].fan_in();

    // Act: consume three values, then give the forwarder time to run ahead
    // as far as the channel lets it
    for expected in 0..3 {
        let delivery = merged.next().await.expect("stream should not be closed");
        assert_eq!(delivery, Delivery::Value(expected));
    }
    sleep(Duration::from_millis(20)).await;

    // Assert: three consumed, one buffered in the channel, one held by the
    // in-flight send
    let pulled_now = pulled.load(Ordering::SeqCst);
    assert!(
        pulled_now <= 5,
        "Forwarder should stay within one handoff of the consumer, pulled {pulled_now}"
    );

    Ok(())
}

#[tokio::test]
async fn test_forwarders_stop_when_output_is_dropped() -> anyhow::Result<()> {
    // Arrange
    let pulled = Arc::new(AtomicUsize::new(0));
    let counting = {
        let pulled = Arc::clone(&pulled);
        stream::iter(0..).inspect(move |_| {
            pulled.fetch_add(1, Ordering::SeqCst);
        })
    };

    let mut merged = vec![counting].fan_in();
    let first = merged.next().await;
    assert!(first.is_some(), "The first value should arrive");

    // Act
    drop(merged);
    sleep(Duration::from_millis(20)).await;
    let after_drop = pulled.load(Ordering::SeqCst);
    sleep(Duration::from_millis(20)).await;

    // Assert
    assert_eq!(
        pulled.load(Ordering::SeqCst),
        after_drop,
        "Forwarding should stop once the output is dropped"
    );

    Ok(())
}

#[tokio::test]
async fn test_single_source_order_passes_through() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![5, 4, 3, 2, 1]);

    // Act
    let values: Vec<i32> = vec![source]
        .fan_in()
        .map(Delivery::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(
        values,
        vec![5, 4, 3, 2, 1],
        "A single source should pass through in order"
    );

    Ok(())
}
