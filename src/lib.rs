//! # Quarterlog
//!
//! A personal activity log: timestamped text entries kept in a local JSON
//! file, listed by day or by week, edited, retimed or removed.
//!
//! ## Overview
//!
//! Every entry is an [`Item`]. Start times are rounded to the nearest
//! quarter hour when the item is built (8 minutes past a boundary already
//! rounds up), so casually entered times group cleanly.
//!
//! The collection logic in [`core`] is a set of pure functions over
//! `Vec<Item>`: they never touch the disk. [`store`] does the loading and
//! saving around them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quarterlog::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let store = Store::new(StoreConfig::new());
//!     let items = store.load()?;
//!
//!     let items = add(items, Item::new("Reply to email"));
//!     println!("{}", render_table(&filter_by_day(&items, None)));
//!
//!     store.save(&items)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`item`] — [`Item`] and the quarter-hour [`normalize`](item::normalize) rule
//! - [`core`] — Collection operations
//!   - [`core::ops`] — [`sort`](core::ops::sort), [`reindex`](core::ops::reindex),
//!     [`remove_at`](core::ops::remove_at), [`edit_message_at`](core::ops::edit_message_at),
//!     [`retime_at`](core::ops::retime_at)
//!   - [`core::filter`] — [`filter_by_day`](core::filter::filter_by_day),
//!     [`filter_by_week`](core::filter::filter_by_week)
//! - [`record`] — Storage records, [`load_items`](record::load_items),
//!   [`serialize_items`](record::serialize_items)
//! - [`store`] — JSON store file
//! - [`config`] — [`StoreConfig`](config::StoreConfig)
//! - [`display`] — Terminal tables
//! - [`cli`] — CLI arguments (feature `cli`)
//! - [`error`] — Error types ([`QuarterlogError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod item;
#[cfg(feature = "cli")]
pub mod logging;
pub mod record;
pub mod store;

// Re-export the main types at the crate root for convenience
pub use error::{QuarterlogError, Result};
pub use item::Item;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use quarterlog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Item;

    pub use crate::error::{QuarterlogError, Result};

    pub use crate::config::StoreConfig;

    pub use crate::core::filter::{WeekBuckets, filter_by_day, filter_by_week, parse_day};
    pub use crate::core::ops::{
        add, edit_message_at, reindex, remove_at, retime_at, sort, sort_and_reindex,
    };

    pub use crate::record::{ItemRecord, load_items, serialize_items};
    pub use crate::store::Store;

    pub use crate::display::{render_table, render_week};
}
