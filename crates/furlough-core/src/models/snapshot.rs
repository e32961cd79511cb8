//! Persisted snapshot of a plan and the per-field restore reducer.
//!
//! The snapshot is a single JSON record:
//!
//! ```text
//! {
//!   "yearResetDate": "2024-01-01",
//!   "holidayAllowance": 25,
//!   "reducedHoursDay": 3,          // 0-6 or null
//!   "weekType": "odd",             // "odd" | "even"
//!   "holidays": ["2024-03-15"],
//!   "blockedDates": []
//! }
//! ```
//!
//! Restoring never fails. Each known field is overlaid on the defaults on its
//! own, so a missing or wrongly typed field only falls back for that field.
//! Weekend dates are dropped from both date lists.

use jiff::civil::{Date, Weekday};
use log::{info, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{coerce_allowance, Configuration, PlanState, WeekType};
use crate::{
    date::{format_date, parse_date, weekday_from_index, weekday_to_index},
    error::Result,
};

/// Storage key the snapshot is saved under.
pub const SNAPSHOT_KEY: &str = "holidayPlannerData";

/// Serializable form of a [`PlanState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub year_reset_date: String,
    pub holiday_allowance: f64,
    pub reduced_hours_day: Option<u8>,
    pub week_type: WeekType,
    pub holidays: Vec<String>,
    pub blocked_dates: Vec<String>,
}

impl From<&PlanState> for Snapshot {
    fn from(state: &PlanState) -> Self {
        let config = state.config();
        Self {
            year_reset_date: format_date(config.year_reset_date),
            holiday_allowance: config.holiday_allowance,
            reduced_hours_day: config.reduced_hours_day.map(weekday_to_index),
            week_type: config.week_type,
            holidays: state.holidays().iter().copied().map(format_date).collect(),
            blocked_dates: state
                .blocked_dates()
                .iter()
                .copied()
                .map(format_date)
                .collect(),
        }
    }
}

impl Snapshot {
    /// Compact JSON used for storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON used for export.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds a plan from snapshot text overlaid on `defaults`.
    ///
    /// Unparseable text yields an empty plan with the defaults.
    pub fn restore(text: &str, defaults: Configuration) -> PlanState {
        let fields = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                warn!("Snapshot is not a JSON object ({}), using defaults", kind_of(&other));
                return PlanState::new(defaults);
            }
            Err(e) => {
                warn!("Snapshot is not valid JSON ({e}), using defaults");
                return PlanState::new(defaults);
            }
        };

        let (config, holidays, blocked_dates) = merge_fields(&fields, defaults);
        let state = PlanState::from_parts(config, holidays, blocked_dates);
        info!(
            "Restored snapshot with {} holidays and {} blocked dates",
            state.holidays().len(),
            state.blocked_dates().len()
        );
        state
    }
}

fn merge_fields(
    fields: &Map<String, Value>,
    defaults: Configuration,
) -> (Configuration, Vec<Date>, Vec<Date>) {
    let mut config = defaults;
    let mut holidays = Vec::new();
    let mut blocked_dates = Vec::new();

    for (field, value) in fields {
        match field.as_str() {
            "yearResetDate" => {
                if let Some(date) = reset_date_field(value) {
                    config.year_reset_date = date;
                }
            }
            "holidayAllowance" => {
                if let Some(allowance) = allowance_field(value) {
                    config.holiday_allowance = allowance;
                }
            }
            "reducedHoursDay" => {
                if let Some(day) = reduced_hours_field(value) {
                    config.reduced_hours_day = day;
                }
            }
            "weekType" => {
                if let Some(week_type) = week_type_field(value) {
                    config.week_type = week_type;
                }
            }
            "holidays" => holidays = date_list_field(field, value),
            "blockedDates" => blocked_dates = date_list_field(field, value),
            other => warn!("Ignoring unknown snapshot field '{other}'"),
        }
    }

    (config, holidays, blocked_dates)
}

fn reset_date_field(value: &Value) -> Option<Date> {
    let parsed = value.as_str().map(parse_date);
    match parsed {
        Some(Ok(date)) => Some(date),
        Some(Err(e)) => {
            warn!("Keeping default yearResetDate: {e}");
            None
        }
        None => {
            warn!("Keeping default yearResetDate: expected a string, got {}", kind_of(value));
            None
        }
    }
}

fn allowance_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => {
            let allowance = coerce_allowance(&number.to_string());
            if number.as_f64() != Some(allowance) {
                warn!("Coercing holidayAllowance {number} to {allowance}");
            }
            Some(allowance)
        }
        Value::String(text) => Some(coerce_allowance(text)),
        other => {
            warn!("Keeping default holidayAllowance: expected a number, got {}", kind_of(other));
            None
        }
    }
}

/// `Some(None)` clears the rule, `None` keeps the default.
fn reduced_hours_field(value: &Value) -> Option<Option<Weekday>> {
    let index = match value {
        Value::Null => return Some(None),
        Value::String(text) if text.trim().is_empty() => return Some(None),
        Value::String(text) => text.trim().parse::<u8>().ok(),
        Value::Number(number) => number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && (0.0..=6.0).contains(n))
            .map(|n| n as u8),
        _ => None,
    };

    match index.map(weekday_from_index) {
        Some(Ok(weekday)) => Some(Some(weekday)),
        _ => {
            warn!("Keeping default reducedHoursDay: {value} is not a weekday index 0-6");
            None
        }
    }
}

fn week_type_field(value: &Value) -> Option<WeekType> {
    match value.as_str().map(str::parse::<WeekType>) {
        Some(Ok(week_type)) => Some(week_type),
        _ => {
            warn!("Keeping default weekType: {value} is not \"odd\" or \"even\"");
            None
        }
    }
}

fn date_list_field(field: &str, value: &Value) -> Vec<Date> {
    let Some(items) = value.as_array() else {
        warn!("Ignoring {field}: expected an array, got {}", kind_of(value));
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item.as_str().map(parse_date) {
            Some(Ok(date)) => Some(date),
            _ => {
                warn!("Dropping {field} entry {item}: not a YYYY-MM-DD date");
                None
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
