//! Day-level operations for the Planner.

use std::collections::BTreeSet;

use jiff::civil::Date;

use super::Planner;
use crate::{
    calendar::CalendarWindow,
    classify::DayKind,
    date::week_number,
    display::DayView,
    error::Result,
    models::{PlanState, Summary, ToggleOutcome},
    params::Day,
};

impl Planner {
    /// Books or un-books a holiday and persists the change.
    ///
    /// Blocked, weekend and reduced-hours days are left untouched and nothing
    /// is written.
    pub fn toggle_holiday(&mut self, date: Date) -> Result<ToggleOutcome> {
        self.apply_toggle(date, PlanState::toggle_holiday)
    }

    /// Blocks or unblocks a day and persists the change.
    pub fn toggle_blocked(&mut self, date: Date) -> Result<ToggleOutcome> {
        self.apply_toggle(date, PlanState::toggle_blocked)
    }

    /// [`Planner::toggle_holiday`] for a date given as text.
    pub fn toggle_holiday_param(&mut self, params: &Day) -> Result<ToggleOutcome> {
        self.toggle_holiday(params.parse()?)
    }

    /// [`Planner::toggle_blocked`] for a date given as text.
    pub fn toggle_blocked_param(&mut self, params: &Day) -> Result<ToggleOutcome> {
        self.toggle_blocked(params.parse()?)
    }

    /// Classification of a single day.
    pub fn classify(&self, date: Date) -> DayKind {
        self.state.classify(date)
    }

    /// Week number of `date` counted from the reset date.
    pub fn week_number(&self, date: Date) -> i64 {
        week_number(date, self.state.config().year_reset_date)
    }

    /// Classification and week number of a single day.
    pub fn day_view(&self, date: Date) -> DayView {
        DayView {
            date,
            kind: self.classify(date),
            week_number: self.week_number(date),
        }
    }

    /// Days taken and remaining.
    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    /// The twelve-month render window.
    pub fn calendar(&self) -> Result<CalendarWindow> {
        CalendarWindow::new(&self.state)
    }

    pub fn holidays(&self) -> &BTreeSet<Date> {
        self.state.holidays()
    }

    pub fn blocked_dates(&self) -> &BTreeSet<Date> {
        self.state.blocked_dates()
    }

    fn apply_toggle(
        &mut self,
        date: Date,
        toggle: fn(&mut PlanState, Date) -> ToggleOutcome,
    ) -> Result<ToggleOutcome> {
        self.commit_if(|state| toggle(state, date), ToggleOutcome::changed)
    }
}
