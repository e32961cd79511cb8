//! Plan configuration and week parity.

use std::str::FromStr;

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

/// Default number of holiday days per cycle.
pub const DEFAULT_HOLIDAY_ALLOWANCE: f64 = 25.0;

/// Which week parity the reduced-hours rule applies on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekType {
    /// Odd-numbered weeks counted from the reset date (week 1, 3, ...)
    #[default]
    Odd,

    /// Even-numbered weeks counted from the reset date (week 0, 2, ...)
    Even,
}

impl FromStr for WeekType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "odd" => Ok(WeekType::Odd),
            "even" => Ok(WeekType::Even),
            _ => Err(format!("Invalid week type: {s}")),
        }
    }
}

impl WeekType {
    /// Snapshot string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekType::Odd => "odd",
            WeekType::Even => "even",
        }
    }
}

/// User-editable settings that drive the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Anchor for the 12-month window and week parity counting
    pub year_reset_date: Date,

    /// Total holiday days permitted per cycle (may be fractional)
    pub holiday_allowance: f64,

    /// Weekday subject to reduced hours; `None` disables the rule
    pub reduced_hours_day: Option<Weekday>,

    /// Week parity the reduced-hours rule applies on
    pub week_type: WeekType,
}

impl Configuration {
    /// Default configuration anchored on January 1 of `year`.
    pub fn for_year(year: i16) -> Self {
        Self {
            year_reset_date: Date::new(year, 1, 1).unwrap_or_default(),
            holiday_allowance: DEFAULT_HOLIDAY_ALLOWANCE,
            reduced_hours_day: None,
            week_type: WeekType::Odd,
        }
    }

    /// Default configuration relative to `today` (January 1 of its year).
    pub fn defaults_for(today: Date) -> Self {
        Self::for_year(today.year())
    }
}

/// Coerces free-form allowance input into a non-negative number.
///
/// Empty, non-numeric, negative or non-finite input yields `0`.
pub fn coerce_allowance(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}
