//! Plain storage records and conversion to and from [`Item`].
//!
//! [`ItemRecord`] mirrors one object of the store file:
//!
//! ```json
//! {
//!     "index": 0,
//!     "message": "standup",
//!     "start_time": "2023-05-01 09:00:00"
//! }
//! ```
//!
//! `index` is optional and ignored on load. A missing or `null`
//! `start_time` means "now".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Item;
use crate::core::ops::sort_and_reindex;
use crate::error::Result;

/// One stored item, as read from or written to the store file.
///
/// Field order matches the alphabetical key order of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Position when written. Recomputed on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Free-form entry text.
    pub message: String,

    /// `YYYY-MM-DD HH:MM:SS`, or absent for "now".
    #[serde(default)]
    pub start_time: Option<String>,
}

impl ItemRecord {
    /// Creates a record without an index.
    pub fn new(message: impl Into<String>, start_time: Option<String>) -> Self {
        Self {
            index: None,
            message: message.into(),
            start_time,
        }
    }

    /// Builds the item this record describes (unindexed).
    ///
    /// # Errors
    ///
    /// Returns [`QuarterlogError::Parse`](crate::QuarterlogError::Parse) if
    /// `start_time` is present but malformed.
    pub fn to_item(&self) -> Result<Item> {
        match &self.start_time {
            Some(start_time) => Item::parse(self.message.as_str(), start_time),
            None => {
                debug!(entry = %self.message, "record has no start_time, using now");
                Ok(Item::new(self.message.as_str()))
            }
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            index: Some(item.index()),
            message: item.message().to_string(),
            start_time: Some(item.stored_start_time()),
        }
    }
}

/// Builds items from storage records.
///
/// Every start time is normalized, stored indices are discarded, and the
/// result is sorted and reindexed.
///
/// # Errors
///
/// Fails on the first record with a malformed `start_time`; no partial
/// result is returned.
pub fn load_items(records: &[ItemRecord]) -> Result<Vec<Item>> {
    let items = records
        .iter()
        .map(ItemRecord::to_item)
        .collect::<Result<Vec<_>>>()?;

    Ok(sort_and_reindex(items))
}

/// Converts items to storage records, index included.
pub fn serialize_items(items: &[Item]) -> Vec<ItemRecord> {
    items.iter().map(ItemRecord::from).collect()
}
