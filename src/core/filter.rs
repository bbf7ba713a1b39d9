//! Filter items by calendar day or by week.
//!
//! # Filter Types
//!
//! | Filter | Function | Result |
//! |--------|----------|--------|
//! | Day | [`filter_by_day`] | Items whose display date matches |
//! | Week | [`filter_by_week`] | [`WeekBuckets`], one list per weekday |
//!
//! # Examples
//!
//! ```
//! use quarterlog::Item;
//! use quarterlog::core::filter::{filter_by_day, filter_by_week, parse_day};
//! use chrono::NaiveDate;
//!
//! # fn main() -> quarterlog::Result<()> {
//! let at = |d, h, m| NaiveDate::from_ymd_opt(2023, 5, d).unwrap().and_hms_opt(h, m, 0).unwrap();
//! let items = vec![
//!     Item::at("standup", at(1, 9, 7)),
//!     Item::at("review", at(2, 10, 0)),
//! ];
//!
//! let monday = filter_by_day(&items, Some(parse_day("05/01/23")?));
//! assert_eq!(monday.len(), 1);
//! assert_eq!(monday[0].display_time(), "09:00 AM");
//!
//! let week = filter_by_week(&items, parse_day("05/03/23")?);
//! assert_eq!(week[1].len(), 1); // Monday
//! assert_eq!(week[2].len(), 1); // Tuesday
//! assert!(week[0].is_empty());  // Sunday
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Day matching compares formatted `mm/dd/yy` strings, so any two
//!   instants on the same local calendar day match
//! - A week runs Sunday through Saturday and is identified by calendar
//!   year plus Sunday-start week number
//! - Week buckets are always seven lists, empty ones included

use std::ops::Index;

use chrono::{NaiveDate, NaiveDateTime};

use crate::Item;
use crate::error::{QuarterlogError, Result};
use crate::item::{DISPLAY_DATE_FORMAT, DISPLAY_TIME_FORMAT, now, week_key_of};

/// Weekday names indexed Sunday = 0 .. Saturday = 6.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Parses a day argument in `mm/dd/yy` form.
///
/// # Errors
///
/// Returns [`QuarterlogError::Parse`] if the format is invalid.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|_| QuarterlogError::invalid_date(input))
}

/// Parses a `mm/dd/yy` date plus `HH:MM AM/PM` clock time.
///
/// # Errors
///
/// Returns [`QuarterlogError::Parse`] if either part is invalid.
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    let format = format!("{DISPLAY_DATE_FORMAT} {DISPLAY_TIME_FORMAT}");
    NaiveDateTime::parse_from_str(&combined, &format)
        .map_err(|_| QuarterlogError::invalid_datetime(combined))
}

/// Returns the items whose display date equals `day`.
///
/// With `day = None` the current local date is used. Input order is kept.
pub fn filter_by_day(items: &[Item], day: Option<NaiveDate>) -> Vec<Item> {
    let day = day.unwrap_or_else(|| now().date());
    let wanted = day.format(DISPLAY_DATE_FORMAT).to_string();

    items
        .iter()
        .filter(|item| item.display_date() == wanted)
        .cloned()
        .collect()
}

/// Items of one week, partitioned by weekday.
///
/// Index with a weekday number (Sunday = 0) to get that day's items, sorted
/// ascending by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekBuckets {
    days: [Vec<Item>; 7],
}

impl WeekBuckets {
    /// Iterates `(weekday name, items)` pairs from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Item])> {
        WEEKDAY_NAMES
            .iter()
            .zip(self.days.iter())
            .map(|(name, items)| (*name, items.as_slice()))
    }

    /// All items of the week, Sunday first.
    pub fn flatten(&self) -> Vec<Item> {
        self.days.iter().flatten().cloned().collect()
    }

    /// Total number of items across the week.
    pub fn total(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no day has any items.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// The seven buckets, Sunday first.
    pub fn days(&self) -> &[Vec<Item>; 7] {
        &self.days
    }
}

impl Index<usize> for WeekBuckets {
    type Output = Vec<Item>;

    fn index(&self, weekday: usize) -> &Self::Output {
        &self.days[weekday]
    }
}

/// Collects the items falling in the same week as `date`.
///
/// The week is Sunday-start; matching compares calendar year and week
/// number (see [`crate::item::week_key_of`]). Each weekday bucket is sorted
/// by start time independently.
///
/// A Sunday-start week that spans New Year is split in two: the December
/// days belong to the last week of the old year and the January days to
/// week 0 of the new one. Querying `01/03/24` therefore shows no Sunday
/// items even when Sunday `12/31/23` has entries.
pub fn filter_by_week(items: &[Item], date: NaiveDate) -> WeekBuckets {
    let wanted = week_key_of(date);
    let mut buckets = WeekBuckets::default();

    for item in items.iter().filter(|item| item.week_key() == wanted) {
        buckets.days[item.weekday_num()].push(item.clone());
    }

    for day in &mut buckets.days {
        day.sort_by_key(Item::start_time);
    }

    buckets
}
