// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared vocabulary for the rheo fan-in workspace.
//!
//! This crate defines the two types every rheo merge speaks in:
//!
//! - [`Delivery`]: the item type of a merged output stream, carrying either a
//!   forwarded value or a fault notice from an abnormally terminated source
//! - [`RheoError`]: the fault taxonomy for sources that panicked or were
//!   cancelled before reaching end-of-stream
//!
//! Keeping these in a dependency-light crate lets test utilities and the merge
//! implementations share them without depending on each other.
//!
//! # Examples
//!
//! ```
//! use rheo_core::{Delivery, RheoError};
//!
//! let forwarded: Delivery<i32> = Delivery::Value(42);
//! assert_eq!(forwarded.value(), Some(42));
//!
//! let fault: Delivery<i32> = Delivery::Fault(RheoError::source_panicked(0, "boom"));
//! assert!(fault.is_fault());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod delivery;
pub mod error;

pub use self::delivery::Delivery;
pub use self::error::{Result, RheoError};
