//! Allowance summary derived from a plan.

use serde::{Deserialize, Serialize};

use super::PlanState;

/// Days taken and remaining against the allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total holiday allowance for the cycle
    pub allowance: f64,
    /// Number of booked holiday days
    pub days_taken: usize,
    /// Allowance minus days taken (negative when over the limit)
    pub days_remaining: f64,
}

impl Summary {
    /// True when more days are booked than the allowance permits.
    pub fn is_over_limit(&self) -> bool {
        self.days_remaining < 0.0
    }
}

impl From<&PlanState> for Summary {
    fn from(state: &PlanState) -> Self {
        Self {
            allowance: state.config().holiday_allowance,
            days_taken: state.days_taken(),
            days_remaining: state.days_remaining(),
        }
    }
}
