//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::civil::Date;

use crate::{
    date::{format_date, weekday_name},
    models::{IgnoreReason, ToggleOutcome},
};

/// Outcome of a toggle gesture on a specific date.
///
/// # Examples
///
/// ```rust
/// use furlough_core::{
///     display::ToggleResult,
///     models::{IgnoreReason, ToggleOutcome},
/// };
/// use jiff::civil::date;
///
/// let result = ToggleResult::new(
///     date(2024, 3, 16),
///     ToggleOutcome::Ignored(IgnoreReason::Weekend),
/// );
/// assert_eq!(
///     result.to_string(),
///     "2024-03-16 (Saturday) is a weekend and cannot be changed.\n"
/// );
/// ```
pub struct ToggleResult {
    pub date: Date,
    pub outcome: ToggleOutcome,
}

impl ToggleResult {
    pub fn new(date: Date, outcome: ToggleOutcome) -> Self {
        Self { date, outcome }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = format!(
            "{} ({})",
            format_date(self.date),
            weekday_name(self.date.weekday())
        );
        match self.outcome {
            ToggleOutcome::Booked => writeln!(f, "Booked {day} as holiday."),
            ToggleOutcome::Unbooked => writeln!(f, "Removed holiday on {day}."),
            ToggleOutcome::Blocked {
                replaced_holiday: false,
            } => writeln!(f, "Blocked {day}."),
            ToggleOutcome::Blocked {
                replaced_holiday: true,
            } => writeln!(f, "Blocked {day}, replacing its holiday booking."),
            ToggleOutcome::Unblocked => writeln!(f, "Unblocked {day}."),
            ToggleOutcome::Ignored(IgnoreReason::Weekend) => {
                writeln!(f, "{day} is a weekend and cannot be changed.")
            }
            ToggleOutcome::Ignored(IgnoreReason::ReducedHours) => {
                writeln!(f, "{day} is a reduced-hours day and cannot be changed.")
            }
            ToggleOutcome::Ignored(IgnoreReason::BlockedDay) => {
                writeln!(f, "{day} is blocked; unblock it before booking.")
            }
        }
    }
}

/// A changed resource together with the list of changes applied to it.
pub struct UpdateResult<T> {
    pub heading: String,
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(heading: impl Into<String>, resource: T, changes: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            resource,
            changes,
        }
    }
}

impl<T: fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f)?;
        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
