// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RheoError;

/// An item delivered by a merged output stream.
///
/// A fan-in forwards every source value as a `Value`. When a source terminates
/// abnormally instead of reaching end-of-stream, the failure is surfaced
/// in-band as a single trailing `Fault` before the output closes, so consumers
/// never hang on a wedged source and never mistake a crash for a clean close.
#[derive(Debug, Clone)]
pub enum Delivery<T> {
    /// A value forwarded from one of the sources
    Value(T),
    /// A fault notice for one or more abnormally terminated sources
    Fault(RheoError),
}

impl<T: PartialEq> PartialEq for Delivery<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Delivery::Value(a), Delivery::Value(b)) => a == b,
            _ => false, // Faults are never equal
        }
    }
}

impl<T: Eq> Eq for Delivery<T> {}

impl<T> Delivery<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Delivery::Value(_))
    }

    /// Returns `true` if this is a `Fault`.
    pub const fn is_fault(&self) -> bool {
        matches!(self, Delivery::Fault(_))
    }

    /// Converts from `Delivery<T>` to `Option<T>`, discarding faults.
    pub fn value(self) -> Option<T> {
        match self {
            Delivery::Value(v) => Some(v),
            Delivery::Fault(_) => None,
        }
    }

    /// Converts from `Delivery<T>` to `Option<RheoError>`, discarding values.
    pub fn fault(self) -> Option<RheoError> {
        match self {
            Delivery::Value(_) => None,
            Delivery::Fault(e) => Some(e),
        }
    }

    /// Maps a `Delivery<T>` to `Delivery<U>` by applying a function to the contained value.
    ///
    /// Faults are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Delivery<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Delivery::Value(v) => Delivery::Value(f(v)),
            Delivery::Fault(e) => Delivery::Fault(e),
        }
    }

    /// Maps a `Delivery<T>` to `Delivery<U>` by applying a function that can fault.
    ///
    /// Faults are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> Delivery<U>
    where
        F: FnOnce(T) -> Delivery<U>,
    {
        match self {
            Delivery::Value(v) => f(v),
            Delivery::Fault(e) => Delivery::Fault(e),
        }
    }

    /// Returns the contained value, panicking if it's a fault.
    ///
    /// # Panics
    ///
    /// Panics if the item is a `Fault`.
    pub fn unwrap(self) -> T {
        match self {
            Delivery::Value(v) => v,
            Delivery::Fault(e) => {
                panic!("called `Delivery::unwrap()` on a `Fault` value: {:?}", e)
            }
        }
    }

    /// Returns the contained value, panicking with a custom message if it's a fault.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the item is a `Fault`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Delivery::Value(v) => v,
            Delivery::Fault(e) => panic!("{}: {:?}", msg, e),
        }
    }
}

impl<T> From<Result<T, RheoError>> for Delivery<T> {
    fn from(result: Result<T, RheoError>) -> Self {
        match result {
            Ok(v) => Delivery::Value(v),
            Err(e) => Delivery::Fault(e),
        }
    }
}

impl<T> From<Delivery<T>> for Result<T, RheoError> {
    fn from(item: Delivery<T>) -> Self {
        match item {
            Delivery::Value(v) => Ok(v),
            Delivery::Fault(e) => Err(e),
        }
    }
}
