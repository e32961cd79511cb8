//! The mutable plan: configuration plus the holiday and blocked date sets.

use std::collections::BTreeSet;

use jiff::civil::Date;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Configuration, Summary};
use crate::{
    classify::{computed_kind, DayKind},
    date::is_weekend,
};

/// Why a toggle request left the plan untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// Weekends are never bookable
    Weekend,
    /// Reduced-hours days are never bookable
    ReducedHours,
    /// A blocked day must be unblocked before it can be booked
    BlockedDay,
}

/// Result of a toggle gesture.
///
/// Anything other than [`ToggleOutcome::Ignored`] means the plan changed and
/// must be persisted and re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleOutcome {
    /// Date added to holidays
    Booked,
    /// Date removed from holidays
    Unbooked,
    /// Date added to blocked dates, removing a holiday booking if there was one
    Blocked { replaced_holiday: bool },
    /// Date removed from blocked dates
    Unblocked,
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl ToggleOutcome {
    /// Whether the plan was mutated.
    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::Ignored(_))
    }
}

/// Holiday plan for one allowance cycle.
///
/// `holidays` and `blocked_dates` are kept disjoint by every constructor and
/// mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    config: Configuration,
    holidays: BTreeSet<Date>,
    blocked_dates: BTreeSet<Date>,
}

impl PlanState {
    /// Creates an empty plan with the given configuration.
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            holidays: BTreeSet::new(),
            blocked_dates: BTreeSet::new(),
        }
    }

    /// Builds a plan from stored parts.
    ///
    /// Weekend dates are dropped from both sets and dates present in both
    /// sets stay blocked.
    pub fn from_parts(
        config: Configuration,
        holidays: impl IntoIterator<Item = Date>,
        blocked_dates: impl IntoIterator<Item = Date>,
    ) -> Self {
        let blocked_dates: BTreeSet<Date> = blocked_dates
            .into_iter()
            .filter(|date| weekday_date("blocked date", *date))
            .collect();
        let holidays = holidays
            .into_iter()
            .filter(|date| weekday_date("holiday", *date))
            .filter(|date| {
                let overlap = blocked_dates.contains(date);
                if overlap {
                    warn!("Dropping holiday {date}: it is also blocked");
                }
                !overlap
            })
            .collect();

        Self {
            config,
            holidays,
            blocked_dates,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Booked holidays in ascending order.
    pub fn holidays(&self) -> &BTreeSet<Date> {
        &self.holidays
    }

    /// Blocked dates in ascending order.
    pub fn blocked_dates(&self) -> &BTreeSet<Date> {
        &self.blocked_dates
    }

    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_blocked(&self, date: Date) -> bool {
        self.blocked_dates.contains(&date)
    }

    /// Classifies a date into exactly one [`DayKind`].
    pub fn classify(&self, date: Date) -> DayKind {
        if let Some(kind) = computed_kind(date, &self.config) {
            kind
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else if self.is_blocked(date) {
            DayKind::Blocked
        } else {
            DayKind::Plain
        }
    }

    /// Books or un-books a holiday. Blocked, weekend and reduced-hours days
    /// are left untouched.
    pub fn toggle_holiday(&mut self, date: Date) -> ToggleOutcome {
        if let Some(reason) = self.non_interactive_reason(date) {
            debug!("Ignoring holiday toggle on {date}: {reason:?}");
            return ToggleOutcome::Ignored(reason);
        }
        if self.is_blocked(date) {
            debug!("Ignoring holiday toggle on blocked day {date}");
            return ToggleOutcome::Ignored(IgnoreReason::BlockedDay);
        }

        if self.holidays.remove(&date) {
            debug!("Unbooked holiday {date}");
            ToggleOutcome::Unbooked
        } else {
            self.holidays.insert(date);
            debug!("Booked holiday {date}");
            ToggleOutcome::Booked
        }
    }

    /// Blocks or unblocks a day. Blocking removes an existing holiday booking.
    pub fn toggle_blocked(&mut self, date: Date) -> ToggleOutcome {
        if let Some(reason) = self.non_interactive_reason(date) {
            debug!("Ignoring blocked toggle on {date}: {reason:?}");
            return ToggleOutcome::Ignored(reason);
        }

        if self.blocked_dates.remove(&date) {
            debug!("Unblocked {date}");
            return ToggleOutcome::Unblocked;
        }

        self.blocked_dates.insert(date);
        let replaced_holiday = self.holidays.remove(&date);
        debug!("Blocked {date} (replaced holiday: {replaced_holiday})");
        ToggleOutcome::Blocked { replaced_holiday }
    }

    /// Number of booked holiday days.
    pub fn days_taken(&self) -> usize {
        self.holidays.len()
    }

    /// Allowance minus days taken; negative when over the limit.
    pub fn days_remaining(&self) -> f64 {
        // Holiday counts stay far below 2^52, so the cast is exact
        self.config.holiday_allowance - self.days_taken() as f64
    }

    pub fn summary(&self) -> Summary {
        Summary::from(self)
    }

    fn non_interactive_reason(&self, date: Date) -> Option<IgnoreReason> {
        match computed_kind(date, &self.config) {
            Some(DayKind::Weekend) => Some(IgnoreReason::Weekend),
            Some(DayKind::ReducedHours) => Some(IgnoreReason::ReducedHours),
            _ => None,
        }
    }
}

fn weekday_date(what: &str, date: Date) -> bool {
    if is_weekend(date) {
        warn!("Dropping {what} {date}: it falls on a weekend");
        return false;
    }
    true
}
