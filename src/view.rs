//! Calendar view-state machine.
//!
//! [`CalendarView`] owns the displayed month, the display mode and the week
//! row used in week mode. It is mutated only through its transition methods,
//! which run to completion synchronously and report outward changes to a
//! [`CalendarHost`]. The renderer reads a [`RenderSnapshot`] after each call.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarConfig, CalendarDate, ConfigError, DragOutcome, MonthGrid, Week, YearMonth,
    classify_drag, days_in_month, next_year_month, prelude::*, prev_year_month,
    week_index_of_date,
};

/// Whether the whole month grid or a single week row is shown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
}

/// State owned by the view.
///
/// `current_week_index` always indexes a row of the grid for
/// `current_year_month`. Month mode keeps it up to date but does not render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    pub current_year_month: YearMonth,
    pub mode: DisplayMode,
    pub current_week_index: usize,
}

/// Receives the changes a [`CalendarView`] reports to the hosting screen.
pub trait CalendarHost {
    /// The user picked `date`. The host owns the selection.
    fn on_select_date(&mut self, date: CalendarDate);

    /// The displayed month changed.
    fn on_month_change(&mut self, _year_month: YearMonth) {}

    /// A gesture or explicit request switched the display mode.
    fn on_mode_change(&mut self, _mode: DisplayMode) {}
}

/// What the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot<'a> {
    pub year_month: YearMonth,
    pub mode: DisplayMode,
    pub week_index: usize,
    pub grid: &'a MonthGrid,
    pub selected: Option<CalendarDate>,
}

impl<'a> RenderSnapshot<'a> {
    /// Row shown in week mode
    pub fn current_week(&self) -> Option<&'a Week> {
        self.grid.week(self.week_index)
    }

    /// Rows to draw: the full grid in month mode, the current row in week mode
    pub fn visible_weeks(&self) -> &'a [Week] {
        match self.mode {
            DisplayMode::Month => self.grid.weeks(),
            DisplayMode::Week => self
                .grid
                .weeks()
                .get(self.week_index..=self.week_index)
                .unwrap_or_default(),
        }
    }
}

/// Controller for one mounted calendar.
#[derive(Debug)]
pub struct CalendarView<H> {
    state: ViewState,
    grid: MonthGrid,
    selected: Option<CalendarDate>,
    config: CalendarConfig,
    host: H,
}

impl<H: CalendarHost> CalendarView<H> {
    /// Creates a view showing the month of `selected`, or of `today` when
    /// nothing is selected, in month mode.
    pub fn new(today: CalendarDate, selected: Option<CalendarDate>, host: H) -> Self {
        Self::build(today, selected, CalendarConfig::default(), host)
    }

    /// Like [`CalendarView::new`] with explicit tunables.
    ///
    /// # Errors
    /// Returns `ConfigError` if `config` fails validation.
    pub fn with_config(
        today: CalendarDate,
        selected: Option<CalendarDate>,
        config: CalendarConfig,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(today, selected, config, host))
    }

    fn build(
        today: CalendarDate,
        selected: Option<CalendarDate>,
        config: CalendarConfig,
        host: H,
    ) -> Self {
        let anchor = selected.unwrap_or(today);
        let year_month = anchor.year_month();
        let state = ViewState {
            current_year_month: year_month,
            mode: DisplayMode::Month,
            current_week_index: week_index_of_date(&anchor, year_month),
        };
        debug!("calendar mounted on {year_month}, week {}", state.current_week_index);
        Self {
            state,
            grid: days_in_month(year_month),
            selected,
            config,
            host,
        }
    }

    /// Returns a copy of the view state
    pub const fn state(&self) -> ViewState {
        self.state
    }

    /// Returns the grid of the displayed month
    pub const fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Returns the displayed month
    pub const fn year_month(&self) -> YearMonth {
        self.state.current_year_month
    }

    /// Returns the display mode
    pub const fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Returns the row shown in week mode
    pub const fn week_index(&self) -> usize {
        self.state.current_week_index
    }

    /// Last selection seen by the view, as mirrored from the host
    pub const fn selected_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Returns the tunables the view was built with
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the host
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the view and hands back the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Everything the renderer needs for the next frame
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            year_month: self.state.current_year_month,
            mode: self.state.mode,
            week_index: self.state.current_week_index,
            grid: &self.grid,
            selected: self.selected,
        }
    }

    /// The user tapped `date`. A date outside the displayed month (a padding
    /// cell, usually) also moves the view to that month.
    pub fn select_date(&mut self, date: CalendarDate) {
        debug!("calendar: select {date}");
        self.host.on_select_date(date);
        self.selected = Some(date);

        let year_month = date.year_month();
        if year_month != self.state.current_year_month {
            self.show_month(year_month);
        }
        self.state.current_week_index = week_index_of_date(&date, year_month);
    }

    /// Shows the following month and reports it to the host.
    pub fn go_to_next_month(&mut self) {
        self.show_month(next_year_month(self.state.current_year_month));
        self.follow_selection_in_month_mode();
    }

    /// Shows the preceding month and reports it to the host.
    pub fn go_to_prev_month(&mut self) {
        self.show_month(prev_year_month(self.state.current_year_month));
        self.follow_selection_in_month_mode();
    }

    /// Pages one week forward. Ignored in month mode.
    ///
    /// From the bottom row this moves to the next month. When that row ran
    /// into the next month it is also that month's top row, so the view
    /// lands on the second row instead.
    pub fn go_to_next_week(&mut self) {
        if self.state.mode != DisplayMode::Week {
            debug!("calendar: next week ignored in month mode");
            return;
        }

        let index = self.state.current_week_index;
        if index < self.grid.last_index() {
            self.state.current_week_index = index + 1;
        } else {
            let shared = self
                .grid
                .week(index)
                .is_some_and(Week::ends_in_next_month);
            self.go_to_next_month();
            self.state.current_week_index = usize::from(shared);
        }
        debug!(
            "calendar: week {} of {}",
            self.state.current_week_index, self.state.current_year_month
        );
    }

    /// Pages one week back. Ignored in month mode.
    ///
    /// From the top row this moves to the previous month, skipping that
    /// month's bottom row when it is the same week as the row just left.
    pub fn go_to_prev_week(&mut self) {
        if self.state.mode != DisplayMode::Week {
            debug!("calendar: previous week ignored in month mode");
            return;
        }

        let index = self.state.current_week_index;
        if index > 0 {
            self.state.current_week_index = index - 1;
        } else {
            let shared = self.grid.week(0).is_some_and(Week::starts_in_prev_month);
            self.go_to_prev_month();
            let last = self.grid.last_index();
            self.state.current_week_index = if shared { last - 1 } else { last };
        }
        debug!(
            "calendar: week {} of {}",
            self.state.current_week_index, self.state.current_year_month
        );
    }

    /// Switches the display mode. The week index is already kept consistent
    /// by the other transitions, so nothing is recomputed.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.state.mode == mode {
            return;
        }
        debug!("calendar: mode {} -> {mode}", self.state.mode);
        self.state.mode = mode;
        self.host.on_mode_change(mode);
    }

    /// Completion signal of a drag gesture, carrying its total vertical
    /// displacement. Applies the resolved mode and returns the classification.
    pub fn handle_drag_end(&mut self, delta: f32) -> DragOutcome {
        let outcome = classify_drag(delta, self.config.drag_threshold);
        debug!("calendar: drag {delta} resolved to {outcome}");
        if let Some(mode) = outcome.target_mode() {
            self.set_mode(mode);
        }
        outcome
    }

    /// Mirrors a selection change made by the host. Nothing is reported back.
    pub fn set_selected_date(&mut self, selected: Option<CalendarDate>) {
        self.selected = selected;
    }

    /// Shows `year_month` because the host changed it. Nothing is reported back.
    pub fn set_year_month(&mut self, year_month: YearMonth) {
        if year_month == self.state.current_year_month {
            return;
        }
        self.replace_grid(year_month);
        self.state.current_week_index = self
            .selected
            .filter(|date| year_month.contains(date))
            .map_or(0, |date| week_index_of_date(&date, year_month));
    }

    /// Jumps to the month and week containing `today`.
    pub fn go_to_today(&mut self, today: CalendarDate) {
        let year_month = today.year_month();
        if year_month != self.state.current_year_month {
            self.show_month(year_month);
        }
        self.state.current_week_index = week_index_of_date(&today, year_month);
    }

    /// Moves to `year_month` and reports it. Leaves the week index clamped
    /// into the new grid for the caller to refine.
    fn show_month(&mut self, year_month: YearMonth) {
        self.replace_grid(year_month);
        self.host.on_month_change(year_month);
    }

    fn replace_grid(&mut self, year_month: YearMonth) {
        debug!(
            "calendar: month {} -> {year_month}",
            self.state.current_year_month
        );
        self.state.current_year_month = year_month;
        self.grid = days_in_month(year_month);
        self.state.current_week_index = self
            .state
            .current_week_index
            .min(self.grid.last_index());
    }

    /// In month mode the week index tracks the selection when it is visible
    /// and falls back to the top row otherwise.
    fn follow_selection_in_month_mode(&mut self) {
        if self.state.mode != DisplayMode::Month {
            return;
        }
        if let Some(selected) = self.selected {
            let year_month = self.state.current_year_month;
            self.state.current_week_index = if year_month.contains(&selected) {
                week_index_of_date(&selected, year_month)
            } else {
                0
            };
        }
    }
}
