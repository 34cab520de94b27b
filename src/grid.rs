//! Month grid construction.
//!
//! A [`MonthGrid`] is the Sunday-first table of weeks shown for one month,
//! padded with the trailing days of the previous month and the leading days
//! of the next month so that every row holds exactly seven cells.

use serde::Serialize;

use crate::{
    CalendarDate, DAYS_PER_WEEK, MAX_WEEKS_PER_GRID, MIN_WEEKS_PER_GRID, Weekday, YearMonth,
};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    /// Day of month printed in the cell
    pub day: u8,
    pub date: CalendarDate,
    /// `false` for padding cells borrowed from an adjacent month
    pub is_current_month: bool,
}

impl DayCell {
    fn new(date: CalendarDate, year_month: YearMonth) -> Self {
        Self {
            day: date.day(),
            date,
            is_current_month: year_month.contains(&date),
        }
    }

    /// Whether this cell shows the host's selected date
    pub fn is_selected(&self, selected: Option<CalendarDate>) -> bool {
        selected == Some(self.date)
    }
}

/// A row of seven consecutive days, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Week([DayCell; DAYS_PER_WEEK]);

impl Week {
    /// Returns the seven cells of the row
    pub const fn days(&self) -> &[DayCell; DAYS_PER_WEEK] {
        &self.0
    }

    /// The Sunday cell
    pub const fn first(&self) -> &DayCell {
        &self.0[0]
    }

    /// The Saturday cell
    pub const fn last(&self) -> &DayCell {
        &self.0[DAYS_PER_WEEK - 1]
    }

    /// Whether `date` appears anywhere in the row
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.0.iter().any(|cell| cell.date == *date)
    }

    /// Row runs past the end of the grid's month into the next one
    pub const fn ends_in_next_month(&self) -> bool {
        !self.last().is_current_month
    }

    /// Row begins with days of the previous month
    pub const fn starts_in_prev_month(&self) -> bool {
        !self.first().is_current_month
    }

    /// Row spans two calendar months
    pub fn is_straddling(&self) -> bool {
        self.first().date.year_month() != self.last().date.year_month()
    }

    /// Iterates the cells Sunday to Saturday
    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Entry of the flat rendering list: the weekday header row followed by day rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GridCell {
    HeaderLabel(Weekday),
    Day(DayCell),
}

impl GridCell {
    /// Text drawn in the cell
    pub fn label(&self) -> String {
        match self {
            Self::HeaderLabel(weekday) => weekday.to_string(),
            Self::Day(cell) => cell.day.to_string(),
        }
    }

    /// Header labels are not tappable
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Day(_))
    }
}

/// All weeks needed to show one month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthGrid {
    year_month: YearMonth,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Returns the month the grid was built for
    pub const fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// Returns the rows, top to bottom
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns the row at `index`, if any
    pub fn week(&self, index: usize) -> Option<&Week> {
        self.weeks.get(index)
    }

    /// Number of week rows (4 to 6)
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// A grid always has at least four rows; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Index of the bottom row
    pub fn last_index(&self) -> usize {
        self.weeks.len().saturating_sub(1)
    }

    /// Row holding `date`, including padding rows; `None` if the date is not shown
    pub fn find_week(&self, date: &CalendarDate) -> Option<usize> {
        self.weeks.iter().position(|week| week.contains(date))
    }

    /// Every cell in display order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(Week::iter)
    }

    /// Header labels followed by every day cell, for a seven-column list renderer
    pub fn render_cells(&self) -> Vec<GridCell> {
        Weekday::ALL
            .into_iter()
            .map(GridCell::HeaderLabel)
            .chain(self.cells().copied().map(GridCell::Day))
            .collect()
    }
}

/// Builds the grid for `year_month`.
///
/// The first row is padded with `first_weekday` days of the previous month
/// and the last row with enough days of the next month to reach Saturday.
pub fn days_in_month(year_month: YearMonth) -> MonthGrid {
    let first = year_month.first_day();
    let last = year_month.last_day();
    let leading = first.weekday().index();
    let trailing = DAYS_PER_WEEK - 1 - last.weekday().index();
    let total = leading + usize::from(year_month.length()) + trailing;
    debug_assert_eq!(total % DAYS_PER_WEEK, 0);
    debug_assert!((MIN_WEEKS_PER_GRID..=MAX_WEEKS_PER_GRID).contains(&(total / DAYS_PER_WEEK)));

    let start = first.add_days(-offset(leading));
    let weeks = (0..total / DAYS_PER_WEEK)
        .map(|row| {
            Week(std::array::from_fn(|col| {
                let date = start.add_days(offset(row * DAYS_PER_WEEK + col));
                DayCell::new(date, year_month)
            }))
        })
        .collect();

    MonthGrid { year_month, weeks }
}

/// Row of `date` within the grid for `year_month`.
///
/// `date` must belong to `year_month`; padding cells are found with
/// [`MonthGrid::find_week`] instead.
pub fn week_index_of_date(date: &CalendarDate, year_month: YearMonth) -> usize {
    debug_assert!(year_month.contains(date));
    (usize::from(date.day()) + year_month.first_weekday().index() - 1) / DAYS_PER_WEEK
}

#[allow(clippy::cast_possible_wrap)]
const fn offset(days: usize) -> i64 {
    days as i64
}
