//! Month grid rendering.
//!
//! Each month renders as a markdown header followed by a fenced text grid,
//! one week per line, Sunday first. Cells are four characters wide:
//!
//! ```text
//!  15     working day (weekends look the same, in the S columns)
//!  15^    reduced-hours day
//! [15]    holiday
//! <15>    blocked
//! ```

use std::fmt;

use crate::{
    calendar::{CalendarMonth, CalendarWindow, DayCell},
    date::month_name,
};

/// Explanation of the cell markers.
pub const LEGEND: &str = "Legend: [d] holiday, <d> blocked, d^ reduced hours";

const WEEKDAY_HEADER: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const BLANK_CELL: &str = "    ";

impl fmt::Display for DayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.date.day();
        if self.holiday {
            write!(f, "[{day:>2}]")
        } else if self.blocked {
            write!(f, "<{day:>2}>")
        } else if self.reduced_hours {
            write!(f, " {day:>2}^")
        } else {
            write!(f, " {day:>2} ")
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {}", month_name(self.month), self.year)?;
        writeln!(f)?;
        writeln!(f, "```text")?;

        let header: Vec<String> = WEEKDAY_HEADER
            .iter()
            .map(|letter| format!("  {letter} "))
            .collect();
        writeln!(f, "{}", header.join(" ").trim_end())?;

        let cells: Vec<String> = std::iter::repeat(BLANK_CELL.to_string())
            .take(usize::from(self.first_weekday))
            .chain(self.days.iter().map(ToString::to_string))
            .collect();
        for week in cells.chunks(7) {
            writeln!(f, "{}", week.join(" ").trim_end())?;
        }

        writeln!(f, "```")
    }
}

impl fmt::Display for CalendarWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for month in &self.months {
            write!(f, "{month}")?;
            writeln!(f)?;
        }
        writeln!(f, "{LEGEND}")
    }
}
