//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Action`] - The single operation an invocation performs
//!
//! The flags are mutually exclusive. With none given the tool shows
//! today's items.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{ArgAction, ArgGroup, Parser};

use crate::config::{DEFAULT_STORE_FILE, StoreConfig};
use crate::core::filter::{parse_date_time, parse_day};
use crate::error::{QuarterlogError, Result};

/// Your personal activity logger.
#[derive(Parser, Debug, Clone)]
#[command(name = "quarterlog")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["new", "day", "remove", "edit", "week", "time", "all"])
        .multiple(false)
))]
#[command(after_help = "EXAMPLES:
    quarterlog -n \"standup\"
    quarterlog -d 05/01/23
    quarterlog -w 05/01/23
    quarterlog -e 2 \"code review\"
    quarterlog -t 2 05/01/23 02:30 PM
    quarterlog -r 0")]
pub struct Args {
    /// Insert a new item into your log, starting now
    #[arg(short, long, value_name = "MESSAGE")]
    pub new: Option<String>,

    /// View your log on the specified day (mm/dd/yy)
    #[arg(short, long, value_name = "DAY")]
    pub day: Option<String>,

    /// Remove the item at the specified index
    #[arg(short, long, value_name = "INDEX", allow_negative_numbers = true)]
    pub remove: Option<i64>,

    /// Edit an item's message
    #[arg(short, long, num_args = 2, value_names = ["INDEX", "MESSAGE"], allow_negative_numbers = true)]
    pub edit: Option<Vec<String>>,

    /// Display the weekly log for the week containing DATE (mm/dd/yy)
    #[arg(short, long, value_name = "DATE")]
    pub week: Option<String>,

    /// Update an item's start time (date mm/dd/yy, time HH:MM AM/PM)
    #[arg(short = 't', long = "time", num_args = 3..=4, value_names = ["INDEX", "DATE", "TIME"], allow_negative_numbers = true)]
    pub time: Option<Vec<String>>,

    /// Display every item in the log
    #[arg(short, long)]
    pub all: bool,

    /// Path to the log file
    #[arg(long, value_name = "PATH", env = "QUARTERLOG_FILE", default_value = DEFAULT_STORE_FILE)]
    pub file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The operation requested on the command line, with arguments parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a new item starting now.
    Add { message: String },
    /// Show today's items.
    Today,
    /// Show one day's items.
    Day { day: NaiveDate },
    /// Show one week's items by weekday.
    Week { date: NaiveDate },
    /// Remove an item.
    Remove { index: i64 },
    /// Replace an item's message.
    Edit { index: i64, message: String },
    /// Move an item to a new start time.
    Retime { index: i64, start_time: NaiveDateTime },
    /// Show every item.
    All,
}

impl Args {
    /// Resolves the flags into a single [`Action`].
    ///
    /// # Errors
    ///
    /// Returns [`QuarterlogError::Parse`] for malformed dates, times or
    /// indices.
    pub fn action(&self) -> Result<Action> {
        if let Some(message) = &self.new {
            return Ok(Action::Add {
                message: message.clone(),
            });
        }
        if let Some(day) = &self.day {
            return Ok(Action::Day {
                day: parse_day(day)?,
            });
        }
        if let Some(index) = self.remove {
            return Ok(Action::Remove { index });
        }
        if let Some(values) = &self.edit {
            let [index, message] = values.as_slice() else {
                return Err(QuarterlogError::invalid_index(values.join(" ")));
            };
            return Ok(Action::Edit {
                index: parse_index(index)?,
                message: message.clone(),
            });
        }
        if let Some(date) = &self.week {
            return Ok(Action::Week {
                date: parse_day(date)?,
            });
        }
        if let Some(values) = &self.time {
            let Some((index, rest)) = values.split_first() else {
                return Err(QuarterlogError::invalid_index(""));
            };
            let Some((date, clock)) = rest.split_first() else {
                return Err(QuarterlogError::invalid_datetime(rest.join(" ")));
            };
            return Ok(Action::Retime {
                index: parse_index(index)?,
                start_time: parse_date_time(date, &clock.join(" "))?,
            });
        }
        if self.all {
            return Ok(Action::All);
        }
        Ok(Action::Today)
    }

    /// Store configuration for this invocation.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new().with_path(&self.file)
    }
}

fn parse_index(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| QuarterlogError::invalid_index(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quarterlog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_is_today() {
        let args = parse(&[]);
        assert_eq!(args.action().unwrap(), Action::Today);
        assert_eq!(args.file, PathBuf::from(".logger-data.json"));
    }

    #[test]
    fn test_new() {
        let args = parse(&["-n", "write tests"]);
        assert_eq!(
            args.action().unwrap(),
            Action::Add {
                message: "write tests".into()
            }
        );
    }

    #[test]
    fn test_day_and_week() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(
            parse(&["-d", "05/01/23"]).action().unwrap(),
            Action::Day { day: date }
        );
        assert_eq!(
            parse(&["--week", "05/01/23"]).action().unwrap(),
            Action::Week { date }
        );
        assert!(parse(&["-d", "2023-05-01"]).action().unwrap_err().is_parse());
    }

    #[test]
    fn test_remove_negative_index() {
        let args = parse(&["-r", "-1"]);
        assert_eq!(args.action().unwrap(), Action::Remove { index: -1 });
    }

    #[test]
    fn test_edit() {
        let args = parse(&["-e", "2", "new text"]);
        assert_eq!(
            args.action().unwrap(),
            Action::Edit {
                index: 2,
                message: "new text".into()
            }
        );
        assert!(parse(&["-e", "two", "x"]).action().unwrap_err().is_parse());
    }

    #[test]
    fn test_retime_split_and_quoted_time() {
        let expected = Action::Retime {
            index: 1,
            start_time: NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        };
        assert_eq!(
            parse(&["-t", "1", "05/01/23", "02:30", "PM"]).action().unwrap(),
            expected
        );
        assert_eq!(
            parse(&["-t", "1", "05/01/23", "02:30 PM"]).action().unwrap(),
            expected
        );
    }

    #[test]
    fn test_actions_are_exclusive() {
        let result = Args::try_parse_from(["quarterlog", "-a", "-n", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_flag() {
        let args = parse(&["--file", "/tmp/other.json", "-a"]);
        assert_eq!(args.store_config().path, PathBuf::from("/tmp/other.json"));
        assert_eq!(args.action().unwrap(), Action::All);
    }

    #[test]
    fn test_verbose_count() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
