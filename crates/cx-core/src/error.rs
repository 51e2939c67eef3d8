//! Error types for cx containers
//!
//! Every failure here is a programmer error: a table built with the wrong
//! number of entries, an index past the end, or a key that is not present.
//! None of them is transient and none is retried.
//!
//! Panicking accessors are `const fn`, and const panics cannot format their
//! arguments, so they use the fixed messages below. The `try_*` accessors
//! return [`CxError`] with the offending values instead.

use thiserror::Error;

/// Panic message for a table or sequence built from the wrong number of entries
pub const CAPACITY_MISMATCH_MSG: &str = "cx: initialized with wrong number of entries";

/// Panic message for a checked index past the declared length
pub const OUT_OF_RANGE_MSG: &str = "cx: index out of range";

/// Panic message for a table lookup that matched no entry
pub const NOT_FOUND_MSG: &str = "cx: could not find entry in map";

/// Panic message for a nul-terminated literal whose last cell is not the terminator
pub const MISSING_NUL_MSG: &str = "cx: literal is not nul-terminated";

/// Core cx errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CxError {
    #[error("Capacity mismatch: expected {expected} entries, got {actual}")]
    CapacityMismatch { expected: usize, actual: usize },

    #[error("Index out of range: index {index}, length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Entry not found")]
    NotFound,

    #[error("Literal of width {width} is not nul-terminated")]
    MissingNul { width: usize },

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] core::str::Utf8Error),
}

/// Result type for cx operations
pub type CxResult<T> = Result<T, CxError>;

impl CxError {
    /// Build a capacity mismatch error and record it
    pub fn capacity_mismatch(expected: usize, actual: usize) -> Self {
        tracing::debug!(expected, actual, "fixed container built with wrong entry count");
        CxError::CapacityMismatch { expected, actual }
    }

    /// Build an out-of-range error and record it
    pub fn out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "checked index out of range");
        CxError::OutOfRange { index, len }
    }

    /// Build a not-found error and record it
    pub fn not_found(len: usize) -> Self {
        tracing::debug!(len, "lookup matched no entry");
        CxError::NotFound
    }
}
