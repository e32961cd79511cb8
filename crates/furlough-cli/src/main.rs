//! Furlough CLI Application
//!
//! Command-line interface and MCP server for the furlough holiday planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use furlough_core::PlannerBuilder;
use log::info;
use mcp::{run_stdio_server, FurloughMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Furlough started");

    match command.unwrap_or(Show) {
        Show => Cli::new(planner, renderer).show(),
        Summary => Cli::new(planner, renderer).summary(),
        Holiday(args) => Cli::new(planner, renderer).toggle_holiday(args),
        Block(args) => Cli::new(planner, renderer).toggle_blocked(args),
        Day(args) => Cli::new(planner, renderer).day(args),
        List => Cli::new(planner, renderer).list(),
        Config { command } => Cli::new(planner, renderer).handle_config_command(command),
        Export => Cli::new(planner, renderer).export(),
        Import(args) => Cli::new(planner, renderer).import(args),
        Serve => {
            info!("Starting Furlough MCP server");
            run_stdio_server(FurloughMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
    }
}
