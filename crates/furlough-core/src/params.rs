//! Parameter structures for Furlough operations
//!
//! These structures are shared by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature.
//!
//! Values arrive as the user typed them, the way a settings form delivers
//! them; parsing and coercion happen in the planner.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{date::parse_date, error::Result};

/// Parameters for operations on a single calendar day.
///
/// Used by toggle_holiday, toggle_blocked and classify_day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Day {
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
}

impl Day {
    /// Parses the date text.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` unless the text is a valid
    /// `YYYY-MM-DD` date.
    pub fn parse(&self) -> Result<Date> {
        parse_date(self.date.trim())
    }
}

/// Parameters for changing plan configuration.
///
/// Every field is optional; only the provided ones are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateConfig {
    /// New yearly reset date (YYYY-MM-DD)
    pub year_reset_date: Option<String>,
    /// New holiday allowance; non-numeric or negative input becomes 0
    pub holiday_allowance: Option<String>,
    /// Reduced-hours weekday 0 (Sunday) to 6 (Saturday); empty string disables it
    pub reduced_hours_day: Option<String>,
    /// Week parity for the reduced-hours day: "odd" or "even"
    pub week_type: Option<String>,
}

impl UpdateConfig {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.year_reset_date.is_none()
            && self.holiday_allowance.is_none()
            && self.reduced_hours_day.is_none()
            && self.week_type.is_none()
    }
}

/// Parameters for importing a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportSnapshot {
    /// Snapshot JSON text
    pub snapshot: String,
}
