// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rheo fan-in workspace.
//!
//! This crate provides synthetic producers, fault-injection wrappers and
//! assertion helpers for testing fan-in behavior. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Helpers
//!
//! ## Producers
//!
//! [`repeat_producer`] emits one value at a fixed cadence and closes, which is
//! the canonical "slow source" of the fan-in tests. [`jitter_producer`] emits
//! a prepared sequence with seeded random gaps for soak testing.
//!
//! ## Hand-driven sources
//!
//! [`source_channel`] returns a sender and a stream: tests push values
//! imperatively and drop the sender to close the source.
//!
//! ```rust
//! use rheo_test_utils::source_channel;
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (tx, mut source) = source_channel();
//!
//! tx.send(42).unwrap();
//! assert_eq!(source.next().await, Some(42));
//!
//! drop(tx); // closes the source
//! assert_eq!(source.next().await, None);
//! # }
//! ```
//!
//! ## Fault injection
//!
//! [`PanicAfter`] wraps a stream and panics once a configured number of items
//! have been yielded, standing in for a source whose forwarding task dies
//! mid-stream.
//!
//! ## Assertions
//!
//! [`drain`] collects a `Delivery` stream to end-of-stream, failing on the
//! first fault; [`assert_no_element_emitted`] fails if a stream produces
//! anything within a timeout window.
//!
//! # Module Organization
//!
//! - `producer` - spawned synthetic producers
//! - `panic_after` - `PanicAfter<S>` fault-injection wrapper
//! - `helpers` - assertion and drain utilities

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod panic_after;
pub mod producer;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use helpers::{assert_no_element_emitted, drain};
pub use panic_after::PanicAfter;
pub use producer::{jitter_producer, repeat_producer};

/// Creates a hand-driven source for imperative test setup.
///
/// The returned stream yields exactly what the sender pushes and reaches
/// end-of-stream when the sender is dropped, so each test controls both the
/// values and the close of its sources.
///
/// # Example
///
/// ```rust
/// use rheo_test_utils::source_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut source) = source_channel();
///
/// tx.send("first").unwrap();
/// assert_eq!(source.next().await, Some("first"));
/// # }
/// ```
pub fn source_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
