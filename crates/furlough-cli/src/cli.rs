//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{fmt, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use furlough_core::{
    display::{ConfigView, DateList, ToggleResult, UpdateResult},
    params::{Day, UpdateConfig},
    GestureHandler, Planner,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// A calendar day
#[derive(Args)]
pub struct DayArgs {
    #[arg(help = "Calendar date in YYYY-MM-DD format")]
    pub date: String,
}

impl From<DayArgs> for Day {
    fn from(val: DayArgs) -> Self {
        Day { date: val.date }
    }
}

/// Change one or more settings
///
/// Only the given options are changed. All values are checked before any of
/// them is applied.
#[derive(Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Date the allowance resets each year (YYYY-MM-DD)")]
    pub reset_date: Option<String>,
    #[arg(
        long,
        help = "Holiday allowance in days; non-numeric or negative values become 0"
    )]
    pub allowance: Option<String>,
    #[arg(
        long,
        help = "Reduced-hours weekday, 0 (Sunday) to 6 (Saturday); an empty value turns it off"
    )]
    pub reduced_day: Option<String>,
    #[arg(long, help = "Weeks on which the reduced-hours day applies")]
    pub week_type: Option<WeekTypeArg>,
}

impl From<ConfigSetArgs> for UpdateConfig {
    fn from(val: ConfigSetArgs) -> Self {
        UpdateConfig {
            year_reset_date: val.reset_date,
            holiday_allowance: val.allowance,
            reduced_hours_day: val.reduced_day,
            week_type: val.week_type.map(|w| w.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings
    #[command(alias = "s")]
    Show,
    /// Change one or more settings
    Set(ConfigSetArgs),
}

/// Replace the plan with an exported snapshot
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "JSON file written by `fl export`")]
    pub file: PathBuf,
}

/// Week parity values accepted by `--week-type`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum WeekTypeArg {
    /// Odd-numbered weeks counted from the reset date
    Odd,
    /// Even-numbered weeks counted from the reset date
    Even,
}

impl fmt::Display for WeekTypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekTypeArg::Odd => write!(f, "odd"),
            WeekTypeArg::Even => write!(f, "even"),
        }
    }
}

/// Runs one CLI command against a planner and renders the result.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub fn show(&self) -> Result<()> {
        let window = self
            .planner
            .calendar()
            .context("Failed to build calendar")?;
        self.renderer
            .render(&format!("{window}\n{}", self.planner.summary()))
    }

    pub fn summary(&self) -> Result<()> {
        self.renderer.render(&self.planner.summary().to_string())
    }

    pub fn toggle_holiday(&mut self, args: DayArgs) -> Result<()> {
        let params = Day::from(args);
        let date = params.parse()?;
        let outcome = self
            .planner
            .on_primary_gesture(date)
            .context("Failed to save holiday")?;
        self.render_toggle(ToggleResult::new(date, outcome))
    }

    pub fn toggle_blocked(&mut self, args: DayArgs) -> Result<()> {
        let params = Day::from(args);
        let date = params.parse()?;
        let outcome = self
            .planner
            .on_secondary_gesture(date)
            .context("Failed to save blocked day")?;
        self.render_toggle(ToggleResult::new(date, outcome))
    }

    pub fn day(&self, args: DayArgs) -> Result<()> {
        let date = Day::from(args).parse()?;
        self.renderer
            .render(&self.planner.day_view(date).to_string())
    }

    pub fn list(&self) -> Result<()> {
        let holidays = DateList::new("Holidays", self.planner.holidays().iter().copied());
        let blocked = DateList::new(
            "Blocked dates",
            self.planner.blocked_dates().iter().copied(),
        );
        self.renderer.render(&format!("{holidays}\n{blocked}"))
    }

    pub fn handle_config_command(&mut self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                let last_saved = self
                    .planner
                    .last_saved()
                    .context("Failed to read save time")?;
                let view = ConfigView::new(self.planner.config()).with_last_saved(last_saved);
                self.renderer.render(&view.to_string())
            }
            ConfigCommands::Set(args) => {
                let params = UpdateConfig::from(args);
                if params.is_empty() {
                    anyhow::bail!(
                        "Nothing to change; pass at least one of --reset-date, --allowance, \
                         --reduced-day or --week-type"
                    );
                }
                let changes = self.planner.update_config(&params)?;
                let result = UpdateResult::with_changes(
                    "Updated settings",
                    ConfigView::new(self.planner.config()),
                    changes,
                );
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub fn export(&self) -> Result<()> {
        let json = self
            .planner
            .export_snapshot()
            .context("Failed to export plan")?;
        println!("{json}");
        Ok(())
    }

    pub fn import(&mut self, args: ImportArgs) -> Result<()> {
        let text = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        self.planner
            .import_snapshot(&text)
            .with_context(|| format!("Failed to import {}", args.file.display()))?;

        let changes = vec![
            format!("{} holidays", self.planner.holidays().len()),
            format!("{} blocked dates", self.planner.blocked_dates().len()),
        ];
        let result = UpdateResult::with_changes(
            format!("Imported plan from {}", args.file.display()),
            self.planner.summary(),
            changes,
        );
        self.renderer.render(&result.to_string())
    }

    fn render_toggle(&self, result: ToggleResult) -> Result<()> {
        debug!("Toggle on {}: {:?}", result.date, result.outcome);
        let mut output = result.to_string();
        if result.outcome.changed() {
            output.push('\n');
            output.push_str(&self.planner.summary().to_string());
        }
        self.renderer.render(&output)
    }
}
