use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DATE_SEPARATOR, MAX_MONTH_INDEX, MONTHS_PER_YEAR, ParseError, Weekday,
    is_valid_year, parse_u8, parse_year, prelude::*,
    types::{Day, Month, month_length},
};

/// Identifies one calendar month. `month` is zero-based (January is 0).
///
/// Values are immutable; navigation produces new values through
/// [`next_year_month`] and [`prev_year_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year", "month + 1")]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year-month from a zero-based month index.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`, or `ParseError::InvalidMonthIndex` if `month`
    /// is greater than 11.
    pub const fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        if !is_valid_year(year) {
            return Err(ParseError::InvalidYear(year));
        }
        if month > MAX_MONTH_INDEX {
            return Err(ParseError::InvalidMonthIndex(month));
        }
        Ok(Self { year, month })
    }

    /// Month of an existing date. Padding dates may sit one year outside
    /// the validated range, so the year is not checked here.
    pub(crate) const fn from_date(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month_typed().index(),
        }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the one-based month number
    pub const fn month_number(&self) -> u8 {
        self.month + 1
    }

    /// Number of days in this month
    pub const fn length(&self) -> u8 {
        month_length(self.year, self.month + 1)
    }

    /// The first day of the month
    pub fn first_day(&self) -> CalendarDate {
        self.date(1)
    }

    /// The last day of the month
    pub fn last_day(&self) -> CalendarDate {
        self.date(self.length())
    }

    /// Weekday of the 1st, i.e. how many padding cells lead the grid
    pub fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    /// Whether `date` falls in this month
    pub const fn contains(&self, date: &CalendarDate) -> bool {
        self.year == date.year() && self.month == date.month_typed().index()
    }

    /// Builds the date for `day` in this month. `day` must be within `1..=length()`.
    pub(crate) fn date(&self, day: u8) -> CalendarDate {
        debug_assert!(day >= 1 && day <= self.length());
        CalendarDate::from_parts(
            self.year,
            Month::from_valid(self.month + 1),
            Day::from_valid(day),
        )
    }

    /// Header title, e.g. `"2024년 2월"` for February 2024
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year, self.month_number())
    }
}

/// The month after `ym`, rolling December over into January of the next year.
pub const fn next_year_month(ym: YearMonth) -> YearMonth {
    let month = (ym.month + 1) % MONTHS_PER_YEAR;
    let year = if month == 0 { ym.year + 1 } else { ym.year };
    YearMonth { year, month }
}

/// The month before `ym`, rolling January back into December of the previous year.
pub const fn prev_year_month(ym: YearMonth) -> YearMonth {
    let month = if ym.month == 0 {
        MAX_MONTH_INDEX
    } else {
        ym.month - 1
    };
    let year = if month == MAX_MONTH_INDEX {
        ym.year - 1
    } else {
        ym.year
    };
    YearMonth { year, month }
}

/// True iff `date`'s year and month equal `ym`'s, regardless of day.
pub const fn is_date_in_year_month(date: &CalendarDate, ym: YearMonth) -> bool {
    ym.contains(date)
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // ISO format: YYYY-MM with a one-based month
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month] => {
                let year = parse_year(year)?;
                let month = Month::new(parse_u8(month)?)?;
                Self::new(year, month.index())
            }
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM, found {trimmed}"
            ))),
        }
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
