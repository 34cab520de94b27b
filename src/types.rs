use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month the caller already knows is in `1..=MAX_MONTH`.
    /// A zero is clamped to January.
    pub(crate) const fn from_valid(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index of this month (January is 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > month_length(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Wraps a day the caller already knows fits its month.
    /// A zero is clamped to the 1st.
    pub(crate) const fn from_valid(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context here, so only the lower bound can be checked
        let invalid = ParseError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        };
        if value < MIN_DAY {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. Grids are Sunday-first, so `Sunday` has index 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday,
    #[display(fmt = "Mon")]
    Monday,
    #[display(fmt = "Tue")]
    Tuesday,
    #[display(fmt = "Wed")]
    Wednesday,
    #[display(fmt = "Thu")]
    Thursday,
    #[display(fmt = "Fri")]
    Friday,
    #[display(fmt = "Sat")]
    Saturday,
}

impl Weekday {
    /// All weekdays in grid column order.
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Column index, 0 for Sunday through 6 for Saturday
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weekday for a column index; wraps modulo 7
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_PER_WEEK]
    }

    /// Weekday of a day counted from 1970-01-01, which was a Thursday
    pub(crate) const fn from_epoch_days(days: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (days + 4).rem_euclid(DAYS_PER_WEEK as i64) as usize;
        Self::from_index(index)
    }

    /// Sunday and Saturday are drawn in accent colours in the header row
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Sunday | Self::Saturday)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a one-based `month` of `year`.
pub const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)` with a one-based month.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (yoe + era * 400) as i32 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(Month::new(1).unwrap().index(), 0);
        assert_eq!(Month::new(12).unwrap().index(), 11);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        // Month out of range is reported as a bad day rather than panicking
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_labels_and_order() {
        let labels: Vec<String> = Weekday::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        for (i, weekday) in Weekday::ALL.iter().enumerate() {
            assert_eq!(weekday.index(), i);
            assert_eq!(Weekday::from_index(i), *weekday);
        }
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_is_weekend() {
        assert!(Weekday::Sunday.is_weekend());
        assert!(Weekday::Saturday.is_weekend());
        assert!(!Weekday::Wednesday.is_weekend());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_month_length() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                month_length(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(month_length(2024, 2), 29);
        assert_eq!(month_length(2000, 2), 29);
    }

    #[test]
    fn test_epoch_days_known_values() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(11_017), (2000, 3, 1));
    }

    #[test]
    fn test_epoch_days_consecutive_across_years() {
        let mut days = days_from_civil(1999, 1, 1);
        for year in 1999..=2001 {
            for month in 1..=12 {
                for day in 1..=month_length(year, month) {
                    assert_eq!(days_from_civil(year, month, day), days);
                    assert_eq!(civil_from_days(days), (year, month, day));
                    days += 1;
                }
            }
        }
    }

    #[test]
    fn test_weekday_from_epoch_days() {
        assert_eq!(Weekday::from_epoch_days(0), Weekday::Thursday);
        assert_eq!(Weekday::from_epoch_days(-1), Weekday::Wednesday);
        // 2024-02-01 was a Thursday
        assert_eq!(
            Weekday::from_epoch_days(days_from_civil(2024, 2, 1)),
            Weekday::Thursday
        );
    }
}
