//! Per-date classification: weekends and the alternating reduced-hours day.
//!
//! Everything here is a pure function of a [`Configuration`] and a date, so
//! it can be evaluated per cell in any order.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    date::{is_weekend, week_number},
    models::{Configuration, WeekType},
};

/// The single category a calendar date falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayKind {
    /// Saturday or Sunday
    Weekend,
    /// The configured reduced-hours weekday on a week of matching parity
    ReducedHours,
    /// Booked as taken leave
    Holiday,
    /// Excluded from booking
    Blocked,
    /// Ordinary working day, free to book or block
    Plain,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayKind::Weekend => "weekend",
            DayKind::ReducedHours => "reduced hours",
            DayKind::Holiday => "holiday",
            DayKind::Blocked => "blocked",
            DayKind::Plain => "working day",
        };
        f.write_str(label)
    }
}

/// True iff `week_number` is odd under Euclidean modulo.
///
/// Parity keeps alternating across the anchor: week 0 is even, week -1 odd.
pub fn is_odd_week(week_number: i64) -> bool {
    week_number.rem_euclid(2) == 1
}

/// Decides whether `date` is a reduced-hours day under `config`.
///
/// Always false when no reduced-hours weekday is configured.
pub fn is_reduced_hours_day(date: Date, config: &Configuration) -> bool {
    let Some(reduced_day) = config.reduced_hours_day else {
        return false;
    };

    let odd = is_odd_week(week_number(date, config.year_reset_date));
    let matches_parity = match config.week_type {
        WeekType::Odd => odd,
        WeekType::Even => !odd,
    };

    date.weekday() == reduced_day && matches_parity
}

/// Computed (never stored) classification; weekend wins over reduced hours.
///
/// Returns `None` for ordinary days, whose kind depends on stored bookings.
pub fn computed_kind(date: Date, config: &Configuration) -> Option<DayKind> {
    if is_weekend(date) {
        Some(DayKind::Weekend)
    } else if is_reduced_hours_day(date, config) {
        Some(DayKind::ReducedHours)
    } else {
        None
    }
}
