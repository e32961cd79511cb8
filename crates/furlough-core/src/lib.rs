//! Core library for the Furlough holiday planner.
//!
//! This crate holds the planning logic: date arithmetic, day classification
//! (weekends and the alternating reduced-hours day), the holiday and blocked
//! date sets, allowance summaries, and snapshot persistence.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`], [`calendar`]): Implement
//!   [`std::fmt::Display`] for direct formatting
//! - **Display Wrappers** ([`display`]): Add context such as the date of a
//!   toggle or the changes of a configuration update
//! - **Terminal Rendering**: Markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use furlough_core::{params::Day, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("furlough.db")))
//!     .with_today(jiff::civil::date(2024, 2, 1))
//!     .build()?;
//!
//! let outcome = planner.toggle_holiday_param(&Day {
//!     date: "2024-03-15".to_string(),
//! })?;
//! println!("{outcome:?}");
//! println!("{}", planner.summary());
//! println!("{}", planner.calendar()?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
pub mod classify;
pub mod date;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use calendar::{CalendarMonth, CalendarWindow, DayCell};
pub use classify::DayKind;
pub use db::{Database, MemoryStorage, Storage};
pub use display::{ConfigView, DateList, DayView, ToggleResult, UpdateResult};
pub use error::{PlannerError, Result};
pub use models::{
    Configuration, IgnoreReason, PlanState, Snapshot, Summary, ToggleOutcome, WeekType,
};
pub use params::{Day, ImportSnapshot, UpdateConfig};
pub use planner::{GestureHandler, Planner, PlannerBuilder};
