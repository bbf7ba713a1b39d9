//! The log entry type and its quarter-hour rounding rule.
//!
//! Every [`Item`] start time passes through [`normalize`] on construction, so
//! times entered casually ("I started at 9:07") cluster into quarter-hour
//! buckets. The rule rounds to the nearest `:00`, `:15`, `:30` or `:45`, with
//! the tie-break moved early: anything 8 minutes or more past a boundary
//! rounds up.
//!
//! # Examples
//!
//! ```
//! use quarterlog::Item;
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap().and_hms_opt(9, 7, 59).unwrap();
//! let item = Item::at("standup", at);
//!
//! assert_eq!(item.display_date(), "05/01/23");
//! assert_eq!(item.display_time(), "09:00 AM");
//! assert_eq!(item.weekday_short(), "Mon");
//! ```
//!
//! # Calendar conventions
//!
//! | Accessor | Convention | Example |
//! |----------|------------|---------|
//! | [`display_date`](Item::display_date) | `mm/dd/yy` | `05/01/23` |
//! | [`display_time`](Item::display_time) | 12-hour clock | `09:00 AM` |
//! | [`weekday_num`](Item::weekday_num) | Sunday = 0 .. Saturday = 6 | `1` |
//! | [`week_num`](Item::week_num) | Sunday-start week of year, 0-based | `18` |
//! | [`day_of_year`](Item::day_of_year) | 1-based | `121` |

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::{QuarterlogError, Result};

/// Format of `start_time` in the store file.
pub const STORED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored format with a fractional-second suffix, written by older versions
/// that kept the raw clock time.
const STORED_TIME_FORMAT_FRACTIONAL: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Format used for [`Item::display_date`] and for day/week arguments.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%y";

/// Format used for [`Item::display_time`].
pub const DISPLAY_TIME_FORMAT: &str = "%I:%M %p";

const QUARTER_MINUTES: u32 = 15;
const ROUND_UP_MINUTES: i64 = 8;

/// Rounds a timestamp to its quarter-hour bucket.
///
/// The minutes past the last quarter-hour boundary, plus seconds and
/// sub-second part, are discarded. If the discarded amount is 8 minutes or
/// more, 15 minutes are added back. The result always has minute in
/// `{0, 15, 30, 45}` and zero seconds.
///
/// ```
/// use quarterlog::item::normalize;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let t = |h, m, s| day.and_hms_opt(h, m, s).unwrap();
///
/// assert_eq!(normalize(t(10, 7, 59)), t(10, 0, 0));
/// assert_eq!(normalize(t(10, 8, 0)), t(10, 15, 0));
/// assert_eq!(normalize(t(23, 53, 0)), t(23, 45, 0) + chrono::TimeDelta::minutes(15));
/// ```
pub fn normalize(time: NaiveDateTime) -> NaiveDateTime {
    let discard = TimeDelta::minutes(i64::from(time.minute() % QUARTER_MINUTES))
        + TimeDelta::seconds(i64::from(time.second()))
        + TimeDelta::nanoseconds(i64::from(time.nanosecond()));

    let floored = time - discard;
    if discard >= TimeDelta::minutes(ROUND_UP_MINUTES) {
        floored + TimeDelta::minutes(i64::from(QUARTER_MINUTES))
    } else {
        floored
    }
}

/// Parses a stored `start_time` string.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, optionally followed by a fractional second.
/// The result is not normalized. Times too close to the end of the
/// representable range to round up are rejected.
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, STORED_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, STORED_TIME_FORMAT_FRACTIONAL))
        .ok()
        .filter(|parsed| {
            parsed
                .checked_add_signed(TimeDelta::minutes(i64::from(QUARTER_MINUTES)))
                .is_some()
        })
        .ok_or_else(|| QuarterlogError::invalid_timestamp(input))
}

/// Sunday-start week of the year, 0-based.
///
/// Days before the first Sunday of the year fall in week 0.
pub fn week_num_of(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7
}

/// Week identity used for week filtering: calendar year plus [`week_num_of`].
pub fn week_key_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), week_num_of(date))
}

/// Current local wall-clock time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A single activity log entry.
///
/// `index` is a position, not an identity: collection operations rewrite it
/// after every structural change so it always equals the item's place in the
/// sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    message: String,
    start_time: NaiveDateTime,
    index: usize,
}

impl Item {
    /// Creates an item starting now (normalized).
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, now())
    }

    /// Creates an item at the given time (normalized).
    pub fn at(message: impl Into<String>, start_time: NaiveDateTime) -> Self {
        Self {
            message: message.into(),
            start_time: normalize(start_time),
            index: 0,
        }
    }

    /// Creates an item from a stored `start_time` string.
    ///
    /// # Errors
    ///
    /// Returns [`QuarterlogError::Parse`] if `start_time` is not in
    /// `YYYY-MM-DD HH:MM:SS` form.
    pub fn parse(message: impl Into<String>, start_time: &str) -> Result<Self> {
        let parsed = parse_start_time(start_time)?;
        Ok(Self::at(message, parsed))
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Returns this item with its index set.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns this item with a replaced message. Time and index are kept.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Normalized start time.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Start time in the store format, `YYYY-MM-DD HH:MM:SS`.
    pub fn stored_start_time(&self) -> String {
        self.start_time.format(STORED_TIME_FORMAT).to_string()
    }

    /// Short date, `mm/dd/yy`.
    pub fn display_date(&self) -> String {
        self.start_time.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// 12-hour clock time, `HH:MM AM`.
    pub fn display_time(&self) -> String {
        self.start_time.format(DISPLAY_TIME_FORMAT).to_string()
    }

    /// Abbreviated weekday name, `Sun` .. `Sat`.
    pub fn weekday_short(&self) -> String {
        self.start_time.format("%a").to_string()
    }

    /// Weekday with Sunday = 0 .. Saturday = 6.
    pub fn weekday_num(&self) -> usize {
        self.start_time.weekday().num_days_from_sunday() as usize
    }

    /// Sunday-start week of the year, 0-based. See [`week_num_of`].
    pub fn week_num(&self) -> u32 {
        week_num_of(self.start_time.date())
    }

    /// Calendar year and week number. See [`week_key_of`].
    pub fn week_key(&self) -> (i32, u32) {
        week_key_of(self.start_time.date())
    }

    /// Day of the year, 1-based.
    pub fn day_of_year(&self) -> u32 {
        self.start_time.ordinal()
    }
}
