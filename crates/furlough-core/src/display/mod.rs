//! Display formatting for calendars, summaries and operation results.
//!
//! Domain types implement [`std::fmt::Display`] here, and small wrapper types
//! cover output that needs extra context (a toggle outcome needs its date, a
//! configuration listing may carry a last-saved timestamp). Everything
//! renders as markdown-friendly text for the terminal renderer and the MCP
//! server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (PlanState, …)  │───▶│ Wrapper Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`calendar`]: Month grids for the twelve-month window
//! - [`collections`]: Date lists (`DateList`)
//! - [`results`]: Operation results (`ToggleResult`, `UpdateResult`)
//! - [`models`]: Display implementations for configuration and summary
//!
//! ## Usage Examples
//!
//! ```rust
//! use furlough_core::{
//!     calendar::CalendarWindow,
//!     display::ToggleResult,
//!     models::{Configuration, PlanState},
//! };
//! use jiff::civil::date;
//!
//! let mut state = PlanState::new(Configuration::for_year(2024));
//! let outcome = state.toggle_holiday(date(2024, 3, 15));
//! assert_eq!(
//!     ToggleResult::new(date(2024, 3, 15), outcome).to_string(),
//!     "Booked 2024-03-15 (Friday) as holiday.\n"
//! );
//!
//! let window = CalendarWindow::new(&state).unwrap();
//! let march = window.months[2].to_string();
//! assert!(march.starts_with("## March 2024"));
//! assert!(march.contains("[15]"));
//! ```

pub mod calendar;
pub mod collections;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use calendar::LEGEND;
pub use collections::DateList;
pub use models::{ConfigView, DayView};
pub use results::{ToggleResult, UpdateResult};
