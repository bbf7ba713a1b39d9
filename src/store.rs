//! Reading and writing the JSON store file.
//!
//! The store is a JSON array with one object per item, keys in
//! alphabetical order and `start_time` as `YYYY-MM-DD HH:MM:SS`:
//!
//! ```json
//! [
//!     {
//!         "index": 0,
//!         "message": "standup",
//!         "start_time": "2023-05-01 09:00:00"
//!     }
//! ]
//! ```
//!
//! Each CLI invocation does one [`Store::load`], one transform and one
//! [`Store::save`]. There is no locking between processes.
//!
//! # Example
//!
//! ```rust,no_run
//! use quarterlog::config::StoreConfig;
//! use quarterlog::core::ops::add;
//! use quarterlog::store::Store;
//! use quarterlog::Item;
//!
//! # fn main() -> quarterlog::Result<()> {
//! let store = Store::new(StoreConfig::new().with_path("activity.json"));
//! let items = store.load()?;
//! let items = add(items, Item::new("write docs"));
//! store.save(&items)?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::Item;
use crate::config::StoreConfig;
use crate::core::ops::sort_and_reindex;
use crate::error::{QuarterlogError, Result};
use crate::record::{ItemRecord, load_items, serialize_items};

/// File-backed item store.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Writes an empty log if the file doesn't exist.
    ///
    /// Returns `true` if a file was created. Does nothing when
    /// `create_if_missing` is off.
    pub fn ensure_exists(&self) -> Result<bool> {
        if !self.config.create_if_missing || self.path().exists() {
            return Ok(false);
        }

        info!(path = %self.path().display(), "creating empty log file");
        fs::write(self.path(), "[]").map_err(|e| self.wrap(e.into()))?;
        Ok(true)
    }

    /// Reads all items, sorted and reindexed.
    ///
    /// # Errors
    ///
    /// - [`QuarterlogError::Store`] wrapping an I/O or JSON error
    /// - [`QuarterlogError::Parse`] if a stored `start_time` is malformed
    pub fn load(&self) -> Result<Vec<Item>> {
        self.ensure_exists()?;

        let content = fs::read_to_string(self.path()).map_err(|e| self.wrap(e.into()))?;
        let items = from_json_str(&content).map_err(|e| match e {
            QuarterlogError::Json(_) => self.wrap(e),
            other => other,
        })?;

        debug!(path = %self.path().display(), count = items.len(), "loaded items");
        Ok(items)
    }

    /// Writes all items. They are sorted and reindexed first.
    pub fn save(&self, items: &[Item]) -> Result<()> {
        let json = to_json_string(items, self.config.indent)?;

        let mut file = fs::File::create(self.path()).map_err(|e| self.wrap(e.into()))?;
        file.write_all(json.as_bytes())
            .map_err(|e| self.wrap(e.into()))?;

        debug!(path = %self.path().display(), count = items.len(), "saved items");
        Ok(())
    }

    fn wrap(&self, source: QuarterlogError) -> QuarterlogError {
        QuarterlogError::store(self.path(), source)
    }
}

/// Parses store file content into sorted, reindexed items.
///
/// Blank content is an empty log.
pub fn from_json_str(content: &str) -> Result<Vec<Item>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<ItemRecord> = serde_json::from_str(content)?;
    load_items(&records)
}

/// Serializes items as a JSON array with the given indent width.
///
/// Items are sorted and reindexed before writing.
pub fn to_json_string(items: &[Item], indent: usize) -> Result<String> {
    let records = serialize_items(&sort_and_reindex(items.to_vec()));

    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;

    String::from_utf8(buffer)
        .map_err(|e| QuarterlogError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
