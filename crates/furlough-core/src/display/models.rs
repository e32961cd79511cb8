//! Display implementations for configuration and summary.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    classify::{is_odd_week, DayKind},
    date::{format_date, weekday_name},
    models::{Configuration, Summary, WeekType},
};

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "- Allowance: {}", self.allowance)?;
        writeln!(f, "- Days taken: {}", self.days_taken)?;
        if self.is_over_limit() {
            writeln!(f, "- Days remaining: {} (over limit)", self.days_remaining)
        } else {
            writeln!(f, "- Days remaining: {}", self.days_remaining)
        }
    }
}

/// Configuration listing, optionally with the time it was last saved.
///
/// The week type line only appears while a reduced-hours day is set, the
/// same way the settings form hides the selector.
pub struct ConfigView<'a> {
    pub config: &'a Configuration,
    pub last_saved: Option<Timestamp>,
}

impl<'a> ConfigView<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            last_saved: None,
        }
    }

    pub fn with_last_saved(mut self, last_saved: Option<Timestamp>) -> Self {
        self.last_saved = last_saved;
        self
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        writeln!(f, "## Settings")?;
        writeln!(f)?;
        writeln!(f, "- Reset date: {}", format_date(config.year_reset_date))?;
        writeln!(f, "- Holiday allowance: {}", config.holiday_allowance)?;
        match config.reduced_hours_day {
            Some(day) => {
                writeln!(f, "- Reduced-hours day: {}", weekday_name(day))?;
                writeln!(f, "- Week type: {}", config.week_type)?;
            }
            None => writeln!(f, "- Reduced-hours day: off")?,
        }
        if let Some(saved) = &self.last_saved {
            writeln!(
                f,
                "- Last saved: {}",
                saved
                    .to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            )?;
        }
        Ok(())
    }
}

/// Classification of one day together with its week number.
pub struct DayView {
    pub date: Date,
    pub kind: DayKind,
    pub week_number: i64,
}

impl fmt::Display for DayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parity = if is_odd_week(self.week_number) {
            "odd"
        } else {
            "even"
        };
        writeln!(
            f,
            "## {} ({})",
            format_date(self.date),
            weekday_name(self.date.weekday())
        )?;
        writeln!(f)?;
        writeln!(f, "- Classification: {}", self.kind)?;
        writeln!(f, "- Week: {} ({parity})", self.week_number)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::Weekday;

    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            allowance: 25.0,
            days_taken: 1,
            days_remaining: 24.0,
        };
        let output = summary.to_string();
        assert!(output.contains("- Allowance: 25\n"));
        assert!(output.contains("- Days taken: 1\n"));
        assert!(output.contains("- Days remaining: 24\n"));
        assert!(!output.contains("over limit"));
    }

    #[test]
    fn test_summary_over_limit() {
        let summary = Summary {
            allowance: 2.5,
            days_taken: 4,
            days_remaining: -1.5,
        };
        assert!(summary
            .to_string()
            .contains("- Days remaining: -1.5 (over limit)"));
    }

    #[test]
    fn test_config_view_hides_week_type_when_off() {
        let mut config = Configuration::for_year(2024);
        let output = ConfigView::new(&config).to_string();
        assert!(output.contains("- Reset date: 2024-01-01"));
        assert!(output.contains("- Reduced-hours day: off"));
        assert!(!output.contains("Week type"));
        assert!(!output.contains("Last saved"));

        config.reduced_hours_day = Some(Weekday::Wednesday);
        config.week_type = WeekType::Even;
        let output = ConfigView::new(&config).to_string();
        assert!(output.contains("- Reduced-hours day: Wednesday"));
        assert!(output.contains("- Week type: even"));
    }

    #[test]
    fn test_day_view() {
        let view = DayView {
            date: jiff::civil::date(2024, 1, 3),
            kind: DayKind::ReducedHours,
            week_number: 1,
        };
        assert_eq!(
            view.to_string(),
            "## 2024-01-03 (Wednesday)\n\n- Classification: reduced hours\n- Week: 1 (odd)\n"
        );

        let before_anchor = DayView {
            date: jiff::civil::date(2023, 12, 27),
            kind: DayKind::Plain,
            week_number: 0,
        };
        assert!(before_anchor.to_string().contains("- Week: 0 (even)"));
    }

    #[test]
    fn test_config_view_last_saved() {
        let config = Configuration::for_year(2024);
        let saved = Timestamp::from_second(1_704_067_200).unwrap();
        let output = ConfigView::new(&config)
            .with_last_saved(Some(saved))
            .to_string();
        assert!(output.contains("- Last saved: "));
    }
}
