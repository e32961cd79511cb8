//! Configuration operations for the Planner.
//!
//! These are the settings-form bindings: each setter updates the
//! configuration, persists, and leaves re-rendering to the caller.

use jiff::civil::{Date, Weekday};
use log::debug;

use super::Planner;
use crate::{
    date::{format_date, parse_date, weekday_from_index, weekday_name},
    error::{PlannerError, Result},
    models::{coerce_allowance, Configuration, WeekType},
    params::UpdateConfig,
};

impl Planner {
    pub fn config(&self) -> &Configuration {
        self.state.config()
    }

    /// Moves the reset date, shifting the window and week parity.
    pub fn set_reset_date(&mut self, date: Date) -> Result<()> {
        debug!("Setting reset date to {date}");
        self.commit(|state| state.config_mut().year_reset_date = date)
    }

    /// Sets the allowance; negative or non-finite values become 0.
    pub fn set_allowance(&mut self, allowance: f64) -> Result<()> {
        let allowance = if allowance.is_finite() && allowance >= 0.0 {
            allowance
        } else {
            0.0
        };
        debug!("Setting holiday allowance to {allowance}");
        self.commit(|state| state.config_mut().holiday_allowance = allowance)
    }

    /// Sets the allowance from form text; unusable input becomes 0.
    pub fn set_allowance_input(&mut self, input: &str) -> Result<f64> {
        let allowance = coerce_allowance(input);
        self.set_allowance(allowance)?;
        Ok(allowance)
    }

    /// Enables (`Some`) or disables (`None`) the reduced-hours day.
    pub fn set_reduced_hours_day(&mut self, weekday: Option<Weekday>) -> Result<()> {
        debug!("Setting reduced-hours day to {weekday:?}");
        self.commit(|state| state.config_mut().reduced_hours_day = weekday)
    }

    /// Sets the reduced-hours day from form text; empty text disables it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` unless the text is empty or a
    /// weekday index 0-6.
    pub fn set_reduced_hours_input(&mut self, input: &str) -> Result<Option<Weekday>> {
        let weekday = parse_reduced_hours_input(input)?;
        self.set_reduced_hours_day(weekday)?;
        Ok(weekday)
    }

    pub fn set_week_type(&mut self, week_type: WeekType) -> Result<()> {
        debug!("Setting week type to {}", week_type.as_str());
        self.commit(|state| state.config_mut().week_type = week_type)
    }

    /// Applies every provided field, persisting once.
    ///
    /// All fields are validated before anything changes. Returns a
    /// description of each applied change.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an unparseable reset date,
    /// reduced-hours weekday or week type.
    pub fn update_config(&mut self, params: &UpdateConfig) -> Result<Vec<String>> {
        let reset_date = params
            .year_reset_date
            .as_deref()
            .map(|text| parse_date(text.trim()))
            .transpose()?;
        let allowance = params.holiday_allowance.as_deref().map(coerce_allowance);
        let reduced_hours = params
            .reduced_hours_day
            .as_deref()
            .map(parse_reduced_hours_input)
            .transpose()?;
        let week_type = params
            .week_type
            .as_deref()
            .map(|text| {
                text.parse::<WeekType>()
                    .map_err(|reason| PlannerError::invalid_input("weekType").with_reason(reason))
            })
            .transpose()?;

        let mut changes = Vec::new();
        if let Some(date) = reset_date {
            changes.push(format!("Reset date set to {}", format_date(date)));
        }
        if let Some(allowance) = allowance {
            changes.push(format!("Holiday allowance set to {allowance}"));
        }
        if let Some(weekday) = reduced_hours {
            changes.push(match weekday {
                Some(day) => format!("Reduced-hours day set to {}", weekday_name(day)),
                None => "Reduced-hours day disabled".to_string(),
            });
        }
        if let Some(week_type) = week_type {
            changes.push(format!("Week type set to {}", week_type.as_str()));
        }
        if changes.is_empty() {
            return Ok(changes);
        }

        self.commit(|state| {
            let config = state.config_mut();
            if let Some(date) = reset_date {
                config.year_reset_date = date;
            }
            if let Some(allowance) = allowance {
                config.holiday_allowance = allowance;
            }
            if let Some(weekday) = reduced_hours {
                config.reduced_hours_day = weekday;
            }
            if let Some(week_type) = week_type {
                config.week_type = week_type;
            }
        })?;

        debug!("Configuration updated: {changes:?}");
        Ok(changes)
    }
}

/// Parses reduced-hours form input: empty clears, otherwise an index 0-6.
fn parse_reduced_hours_input(input: &str) -> Result<Option<Weekday>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let index = input.parse::<u8>().map_err(|_| {
        PlannerError::invalid_input("reducedHoursDay")
            .with_reason(format!("'{input}' is not a weekday index 0-6"))
    })?;
    weekday_from_index(index).map(Some)
}
