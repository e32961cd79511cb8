use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ConfigCommands, DayArgs, ImportArgs};

/// Holiday allowance planner for the terminal
///
/// Furlough shows a twelve-month calendar starting at your allowance reset
/// date, lets you book holidays and block days you cannot take off, and keeps
/// track of how much allowance is left. Weekends and an optional alternating
/// reduced-hours weekday are never bookable.
#[derive(Parser)]
#[command(version, about, name = "fl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/furlough/furlough.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Furlough CLI
///
/// Without a command the calendar and summary are shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the twelve-month calendar and the allowance summary
    #[command(alias = "s")]
    Show,
    /// Show days taken and days remaining
    Summary,
    /// Book a holiday, or remove the booking if the day is already booked
    #[command(alias = "h")]
    Holiday(DayArgs),
    /// Block a day, or unblock it if it is already blocked
    #[command(alias = "b")]
    Block(DayArgs),
    /// Show how a day is classified
    #[command(alias = "d")]
    Day(DayArgs),
    /// List booked holidays and blocked dates
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show or change settings
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print the plan as JSON
    Export,
    /// Replace the plan with a previously exported JSON file
    Import(ImportArgs),
    /// Start the MCP server
    Serve,
}
