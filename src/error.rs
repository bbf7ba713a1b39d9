//! Unified error types for quarterlog.
//!
//! This module provides a single [`QuarterlogError`] enum that covers every
//! failure in the library. Only two kinds can come out of the pure item and
//! collection layer:
//!
//! - **Parse** — a timestamp or date string that doesn't match its fixed format
//! - **Index** — an edit/remove/retime index outside `0..len`
//!
//! The I/O and JSON variants belong to the [`store`](crate::store) layer, which
//! is the only part of the crate that touches the filesystem.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for quarterlog operations.
///
/// # Example
///
/// ```rust
/// use quarterlog::error::Result;
/// use quarterlog::Item;
///
/// fn my_function() -> Result<Vec<Item>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, QuarterlogError>;

/// The error type for all quarterlog operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuarterlogError {
    /// A timestamp or date string did not match the expected format.
    ///
    /// This happens when:
    /// - A stored `start_time` is not `YYYY-MM-DD HH:MM:SS`
    /// - A day or week argument is not `mm/dd/yy`
    /// - A retime clock value is not `HH:MM AM/PM`
    #[error("Invalid {what} '{input}'. Expected format: {expected}")]
    Parse {
        /// What was being parsed (e.g. "start time", "date")
        what: &'static str,
        /// The rejected input
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An item index was outside `0..len`.
    ///
    /// The sequence the operation was given is left unchanged.
    #[error("No item at index {index} (log has {len} item{})", if *len == 1 { "" } else { "s" })]
    IndexOutOfRange {
        /// The requested index as the user typed it
        index: i64,
        /// Number of items in the log
        len: usize,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The store file could not be read or written.
    #[error("Failed to access log file {}: {source}", path.display())]
    Store {
        /// The store file path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: Box<QuarterlogError>,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl QuarterlogError {
    /// Creates a parse error for a stored start time.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        QuarterlogError::Parse {
            what: "start time",
            input: input.into(),
            expected: "YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Creates a parse error for a calendar date argument.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        QuarterlogError::Parse {
            what: "date",
            input: input.into(),
            expected: "mm/dd/yy",
        }
    }

    /// Creates a parse error for a date plus clock time pair.
    pub fn invalid_datetime(input: impl Into<String>) -> Self {
        QuarterlogError::Parse {
            what: "date and time",
            input: input.into(),
            expected: "mm/dd/yy HH:MM AM/PM",
        }
    }

    /// Creates a parse error for an index argument that isn't a number.
    pub fn invalid_index(input: impl Into<String>) -> Self {
        QuarterlogError::Parse {
            what: "index",
            input: input.into(),
            expected: "a whole number",
        }
    }

    /// Creates an index error.
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        QuarterlogError::IndexOutOfRange { index, len }
    }

    /// Wraps an error with the store path it happened on.
    pub fn store(path: impl Into<PathBuf>, source: QuarterlogError) -> Self {
        QuarterlogError::Store {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, QuarterlogError::Parse { .. })
    }

    /// Returns `true` if this is an index error.
    pub fn is_index(&self) -> bool {
        matches!(self, QuarterlogError::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is an IO error, directly or behind a store path.
    pub fn is_io(&self) -> bool {
        match self {
            QuarterlogError::Io(_) => true,
            QuarterlogError::Store { source, .. } => source.is_io(),
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
