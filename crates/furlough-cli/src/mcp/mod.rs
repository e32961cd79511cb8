//! MCP server implementation for Furlough
//!
//! Exposes the planner to AI assistants over the Model Context Protocol.
//! The planner is shared between tool calls behind a mutex; every call runs
//! one planner operation to completion while holding it.

use std::sync::Arc;

use anyhow::Result;
use furlough_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{Day, ImportSnapshot, McpResult, UpdateConfig};

/// MCP server for Furlough
#[derive(Clone)]
pub struct FurloughMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FurloughMcpServer {
    /// Create a new Furlough MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "show_calendar",
        description = "Show the twelve-month holiday calendar starting at the allowance reset date, followed by the allowance summary. Cells: [d] booked holiday, <d> blocked day, d^ reduced-hours day. The first and last column of each week are weekends."
    )]
    async fn show_calendar(&self) -> McpResult {
        self.handlers().show_calendar().await
    }

    #[tool(
        name = "show_summary",
        description = "Show the holiday allowance, the number of days taken and the days remaining. Remaining days can be negative when more days are booked than allowed."
    )]
    async fn show_summary(&self) -> McpResult {
        self.handlers().show_summary().await
    }

    #[tool(
        name = "toggle_holiday",
        description = "Book a day (YYYY-MM-DD) as holiday, or remove the booking if it is already booked. Weekends, reduced-hours days and blocked days are left unchanged and the reply explains why."
    )]
    async fn toggle_holiday(&self, params: Parameters<Day>) -> McpResult {
        self.handlers().toggle_holiday(params).await
    }

    #[tool(
        name = "toggle_blocked",
        description = "Block a day (YYYY-MM-DD) so it cannot be booked, or unblock it if it is already blocked. Blocking a booked holiday removes the booking. Weekends and reduced-hours days cannot be blocked."
    )]
    async fn toggle_blocked(&self, params: Parameters<Day>) -> McpResult {
        self.handlers().toggle_blocked(params).await
    }

    #[tool(
        name = "classify_day",
        description = "Show how a day (YYYY-MM-DD) is classified (weekend, reduced hours, holiday, blocked or working day) and its week number counted from the reset date."
    )]
    async fn classify_day(&self, params: Parameters<Day>) -> McpResult {
        self.handlers().classify_day(params).await
    }

    #[tool(
        name = "show_config",
        description = "Show the current settings: reset date, holiday allowance, reduced-hours weekday and the week parity it applies to."
    )]
    async fn show_config(&self) -> McpResult {
        self.handlers().show_config().await
    }

    #[tool(
        name = "update_config",
        description = "Change one or more settings. All values are strings as typed in a form: year_reset_date as YYYY-MM-DD, holiday_allowance as a number (invalid or negative becomes 0), reduced_hours_day as 0 (Sunday) to 6 (Saturday) or an empty string to turn it off, week_type as 'odd' or 'even'. Nothing changes if any value is invalid."
    )]
    async fn update_config(&self, params: Parameters<UpdateConfig>) -> McpResult {
        self.handlers().update_config(params).await
    }

    #[tool(
        name = "export_snapshot",
        description = "Return the whole plan (settings, holidays and blocked dates) as JSON that import_snapshot accepts."
    )]
    async fn export_snapshot(&self) -> McpResult {
        self.handlers().export_snapshot().await
    }

    #[tool(
        name = "import_snapshot",
        description = "Replace the whole plan with a JSON snapshot produced by export_snapshot. Fields missing from the snapshot take their defaults."
    )]
    async fn import_snapshot(&self, params: Parameters<ImportSnapshot>) -> McpResult {
        self.handlers().import_snapshot(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FurloughMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "furlough".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Furlough plans holiday allowance over a twelve-month window that starts at a yearly reset date.

## Core Concepts
- **Holidays**: booked days; each one counts against the allowance
- **Blocked days**: days that cannot be taken off; a day is never both booked and blocked
- **Weekends** and the optional **reduced-hours day** are never bookable. The reduced-hours day falls on one weekday every other week, counted from the reset date (odd or even weeks)

## Workflow
1. Check settings with `show_config` and adjust them with `update_config`
2. Review the year with `show_calendar`
3. Book days with `toggle_holiday`, block days with `toggle_blocked`
4. Check `show_summary` for the days remaining

Dates are always YYYY-MM-DD."#.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FurloughMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Furlough MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
