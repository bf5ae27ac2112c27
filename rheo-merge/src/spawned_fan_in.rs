// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use std::any::Any;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use rheo_core::{Delivery, RheoError};

/// Task-per-source fan-in backed by a single bounded channel.
///
/// Each source gets its own forwarding task that reads values and hands them
/// to the shared channel; a completion tracker awaits every forwarder and then
/// releases the last sender, closing the output after all in-flight values are
/// drained. The channel holds a single value, so a forwarder with a value
/// ready waits until the consumer takes the previous one; slow consumers slow
/// the sources down instead of growing a buffer.
///
/// A forwarder that panics (or is cancelled) cannot wedge the merge: the
/// tracker observes the abnormal completion through the task's join handle and
/// surfaces it as one trailing [`Delivery::Fault`] after the surviving
/// sources' values have all been delivered. See [`RheoError`] for the fault
/// taxonomy.
///
/// Dropping the output mid-stream stops the forwarders on their next send
/// attempt, so abandoned merges leak no tasks.
pub struct SpawnedFanIn<T> {
    receiver: mpsc::Receiver<Delivery<T>>,
    _tracker: JoinHandle<()>,
}

impl<T> SpawnedFanIn<T>
where
    T: Send + 'static,
{
    /// Spawns the forwarding tasks and the completion tracker.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn new<S>(sources: Vec<S>) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);

        let forwarders = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| tokio::spawn(forward(index, source, tx.clone())))
            .collect();

        // The tracker holds the original sender, so the channel cannot close
        // before every forwarder has been joined and any fault has been sent.
        let tracker = tokio::spawn(track_completion(forwarders, tx));

        Self {
            receiver: rx,
            _tracker: tracker,
        }
    }
}

impl<T> Stream for SpawnedFanIn<T> {
    type Item = Delivery<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Reads one source to end-of-stream, forwarding every value.
async fn forward<S, T>(index: usize, source: S, tx: mpsc::Sender<Delivery<T>>)
where
    S: Stream<Item = T>,
{
    let mut source = Box::pin(source);

    while let Some(value) = source.next().await {
        if tx.send(Delivery::Value(value)).await.is_err() {
            crate::warn!("fan_in: source {} stopped early; output dropped", index);
            break;
        }
    }
}

/// Joins every forwarder, then closes the output.
///
/// Abnormal completions are collected in source order and surfaced as a
/// single trailing fault before the sender is released.
async fn track_completion<T>(forwarders: Vec<JoinHandle<()>>, tx: mpsc::Sender<Delivery<T>>) {
    let mut faults = Vec::new();

    for (index, forwarder) in forwarders.into_iter().enumerate() {
        if let Err(join_error) = forwarder.await {
            let fault = fault_from_join_error(index, join_error);
            crate::error!("fan_in: source {} terminated abnormally: {}", index, fault);
            faults.push(fault);
        }
    }

    if !faults.is_empty() {
        // Best effort: the consumer may already have dropped the output
        let _ = tx.send(Delivery::Fault(RheoError::from_faults(faults))).await;
    }
}

fn fault_from_join_error(index: usize, join_error: JoinError) -> RheoError {
    match join_error.try_into_panic() {
        Ok(payload) => RheoError::source_panicked(index, panic_message(payload.as_ref())),
        Err(_) => RheoError::source_cancelled(index),
    }
}

/// Recovers the text of a panic payload, which is a `&str` for `panic!("...")`
/// and a `String` for `panic!("{}", ...)`.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
