//! Data models for the holiday plan.
//!
//! This module contains the domain model of the planner: the user
//! [`Configuration`], the mutable [`PlanState`] holding booked and blocked
//! dates, the derived [`Summary`], and the persisted [`Snapshot`] form.
//! Display implementations live in [`crate::display`].
//!
//! # State Machine
//!
//! Every calendar date is in exactly one [`DayKind`](crate::classify::DayKind).
//! Weekend and reduced-hours are computed from the configuration; holiday and
//! blocked are stored and mutually exclusive:
//!
//! ```text
//!   Plain   ── toggle_holiday ──▶ Holiday
//!   Holiday ── toggle_holiday ──▶ Plain
//!   Plain   ── toggle_blocked ──▶ Blocked
//!   Holiday ── toggle_blocked ──▶ Blocked
//!   Blocked ── toggle_blocked ──▶ Plain
//!   Blocked ── toggle_holiday ──▶ Blocked (no-op)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use furlough_core::models::{Configuration, PlanState};
//! use jiff::civil::date;
//!
//! let mut state = PlanState::new(Configuration::for_year(2024));
//! state.toggle_holiday(date(2024, 3, 15));
//! assert_eq!(state.days_taken(), 1);
//! assert_eq!(state.days_remaining(), 24.0);
//!
//! state.toggle_blocked(date(2024, 3, 15));
//! assert_eq!(state.days_taken(), 0);
//! assert!(state.is_blocked(date(2024, 3, 15)));
//! ```

pub mod config;
pub mod snapshot;
pub mod state;
pub mod summary;


pub use config::{coerce_allowance, Configuration, WeekType, DEFAULT_HOLIDAY_ALLOWANCE};
pub use snapshot::{Snapshot, SNAPSHOT_KEY};
pub use state::{IgnoreReason, PlanState, ToggleOutcome};
pub use summary::Summary;
