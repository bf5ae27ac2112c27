// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rheo fan-in workspace.
//!
//! A fan-in trusts its sources: ordinary values need no error envelope, and a
//! source that simply ends is a normal close. The only failures this module
//! models are sources that terminate *abnormally*, by panicking or by being
//! cancelled, before reaching end-of-stream.
//!
//! # Examples
//!
//! ```
//! use rheo_core::RheoError;
//!
//! let fault = RheoError::source_panicked(2, "index out of bounds");
//! assert_eq!(fault.source_index(), Some(2));
//! ```

/// Root error type for abnormal source termination.
///
/// Sources are identified by their zero-based position in the vector handed to
/// the fan-in, which is the only stable identity a merged source has.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RheoError {
    /// A source's forwarding task panicked before the source ended
    ///
    /// The message is the panic payload when it was a string, or a
    /// placeholder when the payload was some other type.
    #[error("source {index} panicked: {message}")]
    SourcePanicked {
        /// Zero-based position of the source in the merged vector
        index: usize,
        /// Text recovered from the panic payload
        message: String,
    },

    /// A source's forwarding task was cancelled before the source ended
    ///
    /// This happens when the task is aborted externally, for example during
    /// runtime shutdown.
    #[error("source {index} was cancelled before completing")]
    SourceCancelled {
        /// Zero-based position of the source in the merged vector
        index: usize,
    },

    /// Several sources terminated abnormally during one merge
    ///
    /// The individual faults are preserved so callers can still attribute
    /// each failure to its source.
    #[error("{count} sources terminated abnormally")]
    FaultedSources {
        /// Number of sources that terminated abnormally
        count: usize,
        /// The individual faults, in source-index order
        faults: Vec<RheoError>,
    },
}

impl RheoError {
    /// Create a panic fault for the source at the given index
    pub fn source_panicked(index: usize, message: impl Into<String>) -> Self {
        Self::SourcePanicked {
            index,
            message: message.into(),
        }
    }

    /// Create a cancellation fault for the source at the given index
    #[must_use]
    pub const fn source_cancelled(index: usize) -> Self {
        Self::SourceCancelled { index }
    }

    /// Aggregate multiple faults into a `FaultedSources` variant
    ///
    /// A single fault is returned as-is rather than wrapped, so consumers
    /// matching on `SourcePanicked` keep working in the common one-fault case.
    ///
    /// # Panics
    ///
    /// Panics if `faults` is empty; an aggregate of nothing is a logic error
    /// in the caller.
    #[must_use]
    pub fn from_faults(mut faults: Vec<RheoError>) -> Self {
        assert!(!faults.is_empty(), "cannot aggregate zero faults");

        if faults.len() == 1 {
            return faults.remove(0);
        }

        Self::FaultedSources {
            count: faults.len(),
            faults,
        }
    }

    /// The index of the faulted source, when the fault names exactly one
    ///
    /// Returns `None` for `FaultedSources`; inspect its `faults` field to
    /// attribute the individual failures.
    #[must_use]
    pub const fn source_index(&self) -> Option<usize> {
        match self {
            Self::SourcePanicked { index, .. } | Self::SourceCancelled { index } => Some(*index),
            Self::FaultedSources { .. } => None,
        }
    }

    /// Number of abnormally terminated sources this fault describes
    #[must_use]
    pub fn fault_count(&self) -> usize {
        match self {
            Self::SourcePanicked { .. } | Self::SourceCancelled { .. } => 1,
            Self::FaultedSources { count, .. } => *count,
        }
    }
}

/// Specialized Result type for rheo operations
///
/// This is a type alias for `std::result::Result<T, RheoError>`, providing
/// a convenient shorthand for functions that return rheo faults.
///
/// # Examples
///
/// ```
/// use rheo_core::Result;
///
/// fn drain() -> Result<Vec<i32>> {
///     Ok(vec![1, 2, 3])
/// }
/// ```
pub type Result<T> = std::result::Result<T, RheoError>;
