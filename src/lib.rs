//! Calendar core for a month/week date picker.
//!
//! The crate has two layers. The grid builder ([`days_in_month`],
//! [`week_index_of_date`], [`next_year_month`], [`prev_year_month`],
//! [`is_date_in_year_month`]) is a set of pure functions over
//! [`CalendarDate`] and [`YearMonth`]. [`CalendarView`] is the view-state
//! machine that a rendering layer drives with user actions and reads back
//! through [`RenderSnapshot`].
//!
//! Weeks always start on Sunday and dates are proleptic Gregorian.

mod config;
mod consts;
mod gesture;
mod grid;
mod prelude;
mod types;
mod view;
mod year_month;

pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use gesture::{DragOutcome, classify_drag};
pub use grid::{DayCell, GridCell, MonthGrid, Week, days_in_month, week_index_of_date};
pub use types::{Day, Month, Weekday, is_leap_year, month_length};
pub use view::{CalendarHost, CalendarView, DisplayMode, RenderSnapshot, ViewState};
pub use year_month::{YearMonth, is_date_in_year_month, next_year_month, prev_year_month};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A calendar date with no time-of-day component.
///
/// Equality and ordering only ever look at year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from a year, a one-based month and a day of month.
    ///
    /// # Errors
    /// Returns a `ParseError` if any component is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        validate_year(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Builds a date from already validated components. The year is not
    /// range checked so that grid padding can step past `MAX_YEAR`.
    pub(crate) const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the one-based month
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The month this date belongs to
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_date(*self)
    }

    /// Day of the week this date falls on
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.epoch_days())
    }

    /// Shifts the date by a signed number of days, rolling over months and years.
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day) = civil_from_days(self.epoch_days() + days);
        Self::from_civil(year, month, day)
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.epoch_days() - self.epoch_days()
    }

    pub(crate) const fn epoch_days(&self) -> i64 {
        days_from_civil(self.year, self.month.get(), self.day.get())
    }

    /// Components produced by the civil-day conversion are always in range.
    const fn from_civil(year: i32, month: u8, day: u8) -> Self {
        Self::from_parts(year, Month::from_valid(month), Day::from_valid(day))
    }
}

/// Whether `year` is inside `MIN_YEAR..=MAX_YEAR`
pub(crate) const fn is_valid_year(year: i32) -> bool {
    matches!(year, MIN_YEAR..=MAX_YEAR)
}

fn validate_year(year: i32) -> Result<(), ParseError> {
    if is_valid_year(year) {
        Ok(())
    } else {
        Err(ParseError::InvalidYear(year))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = parse_year(year)?;
                let month = parse_u8(month)?;
                let day = parse_u8(day)?;
                Self::new(year, month, day)
            }
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            ))),
        }
    }
}

/// Helper to parse a year with better error messages
pub(crate) fn parse_year(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
