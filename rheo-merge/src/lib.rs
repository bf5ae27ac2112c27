// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in multiplexing of independent async streams.
//!
//! This crate merges N independently-producing sources into one output stream
//! that delivers every source value exactly once, keeps each source's values
//! in their original relative order, and closes exactly when all sources have
//! closed. Ordering *between* sources is unspecified; values are delivered as
//! they become available.
//!
//! The entry point is [`FanInExt`], implemented for `Vec<S>`:
//!
//! - [`fan_in`](FanInExt::fan_in) spawns one forwarding task per source plus a
//!   completion tracker, all feeding a single bounded channel. This is the
//!   recommended strategy: sources make progress in parallel and a source that
//!   panics is reported as a fault instead of wedging the merge.
//! - [`fan_in_polling`](FanInExt::fan_in_polling) runs entirely on the
//!   consumer's task, attempting one non-suspending read per still-open source
//!   each poll. No tasks are spawned and nothing runs when the consumer is not
//!   polling.
//!
//! Both strategies yield [`Delivery`], so swapping one for the other never
//! changes the consuming code.
//!
//! # Lifecycle
//!
//! A merge passes through three phases. While any source is open the output is
//! *running*: values are forwarded as sources produce them, and a source that
//! never closes keeps the output running indefinitely. Once every source
//! has closed the output is *draining*: already-forwarded values (and a fault
//! notice, if a source terminated abnormally) are still delivered. After the
//! drain the output is *closed*: `next()` returns `None`, and keeps returning
//! `None`. Merging an empty vector yields an output that is closed from the
//! start.
//!
//! # Example
//!
//! ```
//! use futures::{stream, StreamExt};
//! use rheo_merge::FanInExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sources = vec![
//!     stream::iter(vec![1, 2, 3]),
//!     stream::iter(vec![4, 5, 6]),
//! ];
//!
//! let mut values: Vec<i32> = sources
//!     .fan_in()
//!     .map(|delivery| delivery.unwrap())
//!     .collect()
//!     .await;
//!
//! // Cross-source order is unspecified; the value set never is.
//! values.sort_unstable();
//! assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
//! # }
//! ```
//!
//! # Choosing a strategy
//!
//! | Strategy | Tasks | Source faults | Use when |
//! |----------|-------|---------------|----------|
//! | [`fan_in`](FanInExt::fan_in) | one per source | surfaced as [`Delivery::Fault`] | sources should progress concurrently |
//! | [`fan_in_polling`](FanInExt::fan_in_polling) | none | panic unwinds into the consumer | everything must stay on the consumer's task |
//!
//! # Feeding a merge from channels
//!
//! Producer tasks usually own the sending half of a channel;
//! [`ReceiverSourceExt`] turns the receiving half into a source.

#![allow(clippy::multiple_crate_versions)]
mod fan_in;
mod logging;
mod polling_fan_in;
mod source;
mod spawned_fan_in;

pub use fan_in::FanInExt;
pub use polling_fan_in::PollingFanIn;
pub use rheo_core::{Delivery, Result, RheoError};
pub use source::ReceiverSourceExt;
pub use spawned_fan_in::SpawnedFanIn;
