//! High-level planner API for booking and blocking days.
//!
//! [`Planner`] owns one [`PlanState`] and the [`Storage`] it is persisted to.
//! There is no ambient global: every interface (CLI, MCP server, tests)
//! builds its own planner through [`PlannerBuilder`] and passes it around by
//! reference.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Renderer     │    │     Planner     │    │     Storage     │
//! │ (CLI grid, MCP) │───▶│  (PlanState +   │───▶│ (SQLite or      │
//! │   gestures      │    │   operations)   │    │  in-memory)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`day_ops`]: Toggle gestures and per-day queries
//! - [`config_ops`]: Configuration setters fed by the settings surface
//! - [`snapshot_ops`]: Persistence, import and export
//!
//! Every mutation is applied in memory and then the full snapshot is written
//! before the call returns. A failed write rolls the in-memory change back.
//!
//! # Usage Examples
//!
//! ```rust
//! use furlough_core::{db::MemoryStorage, GestureHandler, PlannerBuilder, ToggleOutcome};
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .with_today(date(2024, 2, 1))
//!     .build()?;
//!
//! // A primary gesture books the day
//! let outcome = planner.on_primary_gesture(date(2024, 3, 15))?;
//! assert_eq!(outcome, ToggleOutcome::Booked);
//! assert_eq!(planner.summary().days_remaining, 24.0);
//! # Ok(())
//! # }
//! ```

use jiff::civil::Date;

use crate::{
    db::Storage,
    error::Result,
    models::{PlanState, ToggleOutcome},
};

pub mod builder;
pub mod config_ops;
pub mod day_ops;
pub mod snapshot_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Callback interface a renderer drives when the user interacts with a day.
///
/// Renderers only issue gestures for interactive cells, but implementations
/// must treat gestures on weekend or reduced-hours days as no-ops.
pub trait GestureHandler {
    /// Primary gesture (click): book or un-book a holiday.
    fn on_primary_gesture(&mut self, date: Date) -> Result<ToggleOutcome>;

    /// Secondary gesture (right-click): block or unblock the day.
    fn on_secondary_gesture(&mut self, date: Date) -> Result<ToggleOutcome>;
}

/// Main planner interface for managing one holiday plan.
pub struct Planner {
    pub(crate) state: PlanState,
    pub(crate) storage: Box<dyn Storage + Send>,
    pub(crate) today: Date,
}

impl Planner {
    /// Creates a planner over an already loaded state.
    pub(crate) fn new(state: PlanState, storage: Box<dyn Storage + Send>, today: Date) -> Self {
        Self {
            state,
            storage,
            today,
        }
    }

    /// Current plan.
    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// The date treated as today (used for defaults).
    pub fn today(&self) -> Date {
        self.today
    }

    /// Applies `change` to the state and persists it, rolling back on failure.
    pub(crate) fn commit<T>(&mut self, change: impl FnOnce(&mut PlanState) -> T) -> Result<T> {
        self.commit_if(change, |_| true)
    }

    /// Like [`Planner::commit`], but only writes when `changed` holds for the
    /// value `change` returned.
    pub(crate) fn commit_if<T>(
        &mut self,
        change: impl FnOnce(&mut PlanState) -> T,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T> {
        let previous = self.state.clone();
        let value = change(&mut self.state);
        if !changed(&value) {
            return Ok(value);
        }
        if let Err(e) = self.persist() {
            self.state = previous;
            return Err(e);
        }
        Ok(value)
    }
}

impl GestureHandler for Planner {
    fn on_primary_gesture(&mut self, date: Date) -> Result<ToggleOutcome> {
        self.toggle_holiday(date)
    }

    fn on_secondary_gesture(&mut self, date: Date) -> Result<ToggleOutcome> {
        self.toggle_blocked(date)
    }
}
