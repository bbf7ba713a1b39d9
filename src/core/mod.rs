//! Core collection logic for quarterlog.
//!
//! This module contains:
//! - [`ops`] - Sort, reindex, add, remove, edit and retime
//! - [`filter`] - Day and week filtering
//!
//! Everything here is a pure transform over `Vec<Item>` / `&[Item]`.
//! Loading and saving belong to [`crate::store`].

pub mod filter;
pub mod ops;

pub use filter::{
    WEEKDAY_NAMES, WeekBuckets, filter_by_day, filter_by_week, parse_date_time, parse_day,
};
pub use ops::{
    add, checked_index, edit_message_at, reindex, remove_at, retime_at, sort, sort_and_reindex,
};

pub use crate::Item;
