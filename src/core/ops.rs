//! Structural operations over an ordered item sequence.
//!
//! Every function here is a pure transform: it takes the caller's sequence
//! and returns a new one. Nothing is read from or written to disk.
//!
//! After any structural change (add, remove, sort, retime) the result is
//! reindexed, so `index` always runs `0..len` in sequence order.
//!
//! # Examples
//!
//! ```
//! use quarterlog::Item;
//! use quarterlog::core::ops::{add, remove_at};
//! use chrono::NaiveDate;
//!
//! # fn main() -> quarterlog::Result<()> {
//! let day = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
//! let items = add(Vec::new(), Item::at("email", day.and_hms_opt(11, 0, 0).unwrap()));
//! let items = add(items, Item::at("standup", day.and_hms_opt(9, 0, 0).unwrap()));
//!
//! assert_eq!(items[0].message(), "standup");
//! assert_eq!(items[1].index(), 1);
//!
//! let items = remove_at(&items, 0)?;
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].index(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Failure behavior
//!
//! [`remove_at`], [`edit_message_at`] and [`retime_at`] borrow the input and
//! check the index before building anything. On
//! [`QuarterlogError::IndexOutOfRange`] the caller's sequence is untouched.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::Item;
use crate::error::{QuarterlogError, Result};

/// Sorts items ascending by start time.
///
/// The sort is stable: items with equal start times keep their relative
/// input order. Indices are not rewritten; see [`sort_and_reindex`].
pub fn sort(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by_key(Item::start_time);
    items
}

/// Overwrites every item's index with its position in `items`.
pub fn reindex(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| item.with_index(position))
        .collect()
}

/// [`sort`] followed by [`reindex`].
pub fn sort_and_reindex(items: Vec<Item>) -> Vec<Item> {
    reindex(sort(items))
}

/// Appends an item and restores the sorted, reindexed invariant.
pub fn add(mut items: Vec<Item>, item: Item) -> Vec<Item> {
    debug!(entry = item.message(), start_time = %item.start_time(), "adding item");
    items.push(item);
    sort_and_reindex(items)
}

/// Converts a user-supplied index into a position within a log of `len` items.
///
/// # Errors
///
/// Returns [`QuarterlogError::IndexOutOfRange`] if `raw` is negative or
/// `>= len`.
pub fn checked_index(raw: i64, len: usize) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&index| index < len)
        .ok_or_else(|| QuarterlogError::index_out_of_range(raw, len))
}

fn ensure_in_range(items: &[Item], index: usize) -> Result<()> {
    if index < items.len() {
        Ok(())
    } else {
        let raw = i64::try_from(index).unwrap_or(i64::MAX);
        Err(QuarterlogError::index_out_of_range(raw, items.len()))
    }
}

/// Removes the item at `index` and reindexes the rest.
///
/// # Errors
///
/// Returns [`QuarterlogError::IndexOutOfRange`] if `index >= items.len()`.
pub fn remove_at(items: &[Item], index: usize) -> Result<Vec<Item>> {
    ensure_in_range(items, index)?;
    debug!(index, entry = items[index].message(), "removing item");

    let remaining = items
        .iter()
        .enumerate()
        .filter(|&(position, _)| position != index)
        .map(|(_, item)| item.clone())
        .collect();

    Ok(reindex(remaining))
}

/// Replaces the message of the item at `index`.
///
/// Start time, index and order of every item are unchanged.
///
/// # Errors
///
/// Returns [`QuarterlogError::IndexOutOfRange`] if `index >= items.len()`.
pub fn edit_message_at(
    items: &[Item],
    index: usize,
    message: impl Into<String>,
) -> Result<Vec<Item>> {
    ensure_in_range(items, index)?;

    let mut edited = items.to_vec();
    let replaced = edited[index].clone().with_message(message);
    debug!(index, from = edited[index].message(), to = replaced.message(), "editing item");
    edited[index] = replaced;

    Ok(edited)
}

/// Moves the item at `index` to a new start time.
///
/// The item is removed, rebuilt with the same message and the new
/// (normalized) start time, appended, and the whole sequence is sorted and
/// reindexed. The item usually ends up at a different position.
///
/// # Errors
///
/// Returns [`QuarterlogError::IndexOutOfRange`] if `index >= items.len()`.
pub fn retime_at(items: &[Item], index: usize, start_time: NaiveDateTime) -> Result<Vec<Item>> {
    ensure_in_range(items, index)?;

    let retimed = Item::at(items[index].message(), start_time);
    debug!(
        index,
        from = %items[index].start_time(),
        to = %retimed.start_time(),
        "retiming item"
    );

    let mut remaining = remove_at(items, index)?;
    remaining.push(retimed);
    Ok(sort_and_reindex(remaining))
}
