//! Twelve-month calendar window handed to renderers.
//!
//! The window starts at the month of the reset date. For every day it carries
//! the four flags a renderer needs; holiday and blocked are only reported for
//! days that are neither weekend nor reduced-hours, matching which cells
//! accept gestures.

use jiff::civil::Date;
use serde::Serialize;

use crate::{
    classify::is_reduced_hours_day,
    date::{days_in_month, first_weekday_of_month, is_weekend, month_offset},
    error::Result,
    models::PlanState,
};

/// Number of months shown from the reset date onwards.
pub const WINDOW_MONTHS: i8 = 12;

/// One day cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: Date,
    pub weekend: bool,
    pub reduced_hours: bool,
    pub holiday: bool,
    pub blocked: bool,
}

impl DayCell {
    /// Builds the cell for `date` from the plan.
    pub fn new(date: Date, state: &PlanState) -> Self {
        let weekend = is_weekend(date);
        let reduced_hours = is_reduced_hours_day(date, state.config());
        let interactive = !weekend && !reduced_hours;
        Self {
            date,
            weekend,
            reduced_hours,
            holiday: interactive && state.is_holiday(date),
            blocked: interactive && state.is_blocked(date),
        }
    }

    /// Whether the cell accepts primary/secondary gestures.
    pub fn interactive(&self) -> bool {
        !self.weekend && !self.reduced_hours
    }
}

/// One month of day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i16,
    /// 1-based month
    pub month: i8,
    /// Weekday index of the 1st, `0` = Sunday
    pub first_weekday: u8,
    pub days: Vec<DayCell>,
}

impl CalendarMonth {
    /// Builds the cells of one month.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the month lies outside the
    /// supported date range.
    pub fn new(year: i16, month: i8, state: &PlanState) -> Result<Self> {
        let first_weekday = first_weekday_of_month(year, month)?;
        let length = days_in_month(year, month)?;
        let days = (1..=length)
            .filter_map(|day| Date::new(year, month, day).ok())
            .map(|date| DayCell::new(date, state))
            .collect();

        Ok(Self {
            year,
            month,
            first_weekday,
            days,
        })
    }
}

/// The full twelve-month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWindow {
    pub months: Vec<CalendarMonth>,
}

impl CalendarWindow {
    /// Builds the window starting at the reset date's month.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the window runs past the
    /// supported date range (year 9999).
    pub fn new(state: &PlanState) -> Result<Self> {
        let anchor = state.config().year_reset_date;
        let months = (0..WINDOW_MONTHS)
            .map(|offset| {
                let (year, month) = month_offset(anchor.year(), anchor.month(), offset);
                CalendarMonth::new(year, month, state)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { months })
    }

    /// Looks up the cell for a date inside the window.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        self.months
            .iter()
            .find(|m| m.year == date.year() && m.month == date.month())
            .and_then(|m| m.days.get(usize::try_from(date.day() - 1).ok()?))
    }
}
