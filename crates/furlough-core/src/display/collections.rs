//! Collection wrapper types for displaying groups of dates.

use std::fmt;

use jiff::civil::Date;

use crate::date::{format_date, weekday_name};

/// A titled list of dates, one per line with its weekday.
///
/// # Examples
///
/// ```rust
/// use furlough_core::display::DateList;
/// use jiff::civil::date;
///
/// let list = DateList::new("Holidays", [date(2024, 3, 15)]);
/// assert_eq!(list.to_string(), "## Holidays\n\n- 2024-03-15 (Friday)\n");
///
/// let empty = DateList::new("Blocked dates", []);
/// assert!(empty.to_string().contains("None."));
/// ```
pub struct DateList {
    pub title: String,
    pub dates: Vec<Date>,
}

impl DateList {
    pub fn new(title: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            title: title.into(),
            dates: dates.into_iter().collect(),
        }
    }
}

impl fmt::Display for DateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        if self.dates.is_empty() {
            return writeln!(f, "None.");
        }
        for date in &self.dates {
            writeln!(f, "- {} ({})", format_date(*date), weekday_name(date.weekday()))?;
        }
        Ok(())
    }
}
