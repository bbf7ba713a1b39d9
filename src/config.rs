//! Configuration for the log store.
//!
//! The store file location is an explicit value handed to
//! [`Store`](crate::store::Store), never a global. The CLI fills it from
//! `--file` or the `QUARTERLOG_FILE` environment variable.
//!
//! # Example
//!
//! ```rust
//! use quarterlog::config::StoreConfig;
//!
//! let config = StoreConfig::new()
//!     .with_path("/tmp/activity.json")
//!     .with_create_if_missing(false);
//!
//! assert_eq!(config.path.to_str(), Some("/tmp/activity.json"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default store file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = ".logger-data.json";

/// Configuration for reading and writing the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file path (default: `.logger-data.json`)
    pub path: PathBuf,

    /// Write an empty log when the file doesn't exist (default: true)
    pub create_if_missing: bool,

    /// Spaces per indentation level in the written JSON (default: 4)
    pub indent: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
            create_if_missing: true,
            indent: 4,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets whether a missing file is created as an empty log.
    #[must_use]
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
