//! MCP tool handlers implementation

use std::sync::Arc;

use furlough_core::{
    display::{ConfigView, ToggleResult, UpdateResult},
    params as core, GestureHandler, Planner,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Adds JSON deserialization and schema generation on top of the core
/// parameter structs, which stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Day = McpParams<core::Day>;
pub type UpdateConfig = McpParams<core::UpdateConfig>;
pub type ImportSnapshot = McpParams<core::ImportSnapshot>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn show_calendar(&self) -> McpResult {
        debug!("show_calendar");

        let planner = self.planner.lock().await;
        let window = planner
            .calendar()
            .map_err(|e| to_mcp_error("Failed to build calendar", &e))?;
        text_result(format!("{window}\n{}", planner.summary()))
    }

    pub async fn show_summary(&self) -> McpResult {
        debug!("show_summary");

        text_result(self.planner.lock().await.summary().to_string())
    }

    pub async fn toggle_holiday(&self, Parameters(params): Parameters<Day>) -> McpResult {
        debug!("toggle_holiday: {params:?}");

        let date = params
            .as_ref()
            .parse()
            .map_err(|e| to_mcp_error("Invalid date", &e))?;
        let mut planner = self.planner.lock().await;
        let outcome = planner
            .on_primary_gesture(date)
            .map_err(|e| to_mcp_error("Failed to save holiday", &e))?;

        text_result(format!(
            "{}\n{}",
            ToggleResult::new(date, outcome),
            planner.summary()
        ))
    }

    pub async fn toggle_blocked(&self, Parameters(params): Parameters<Day>) -> McpResult {
        debug!("toggle_blocked: {params:?}");

        let date = params
            .as_ref()
            .parse()
            .map_err(|e| to_mcp_error("Invalid date", &e))?;
        let mut planner = self.planner.lock().await;
        let outcome = planner
            .on_secondary_gesture(date)
            .map_err(|e| to_mcp_error("Failed to save blocked day", &e))?;

        text_result(format!(
            "{}\n{}",
            ToggleResult::new(date, outcome),
            planner.summary()
        ))
    }

    pub async fn classify_day(&self, Parameters(params): Parameters<Day>) -> McpResult {
        debug!("classify_day: {params:?}");

        let date = params
            .as_ref()
            .parse()
            .map_err(|e| to_mcp_error("Invalid date", &e))?;
        text_result(self.planner.lock().await.day_view(date).to_string())
    }

    pub async fn show_config(&self) -> McpResult {
        debug!("show_config");

        let planner = self.planner.lock().await;
        let last_saved = planner
            .last_saved()
            .map_err(|e| to_mcp_error("Failed to read save time", &e))?;
        text_result(
            ConfigView::new(planner.config())
                .with_last_saved(last_saved)
                .to_string(),
        )
    }

    pub async fn update_config(&self, Parameters(params): Parameters<UpdateConfig>) -> McpResult {
        debug!("update_config: {params:?}");

        let mut planner = self.planner.lock().await;
        let changes = planner
            .update_config(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update settings", &e))?;

        let result =
            UpdateResult::with_changes("Updated settings", ConfigView::new(planner.config()), changes);
        text_result(result.to_string())
    }

    pub async fn export_snapshot(&self) -> McpResult {
        debug!("export_snapshot");

        let json = self
            .planner
            .lock()
            .await
            .export_snapshot()
            .map_err(|e| to_mcp_error("Failed to export plan", &e))?;
        text_result(json)
    }

    pub async fn import_snapshot(
        &self,
        Parameters(params): Parameters<ImportSnapshot>,
    ) -> McpResult {
        debug!("import_snapshot");

        let mut planner = self.planner.lock().await;
        planner
            .import_snapshot(&params.as_ref().snapshot)
            .map_err(|e| to_mcp_error("Failed to import plan", &e))?;

        let changes = vec![
            format!("{} holidays", planner.holidays().len()),
            format!("{} blocked dates", planner.blocked_dates().len()),
        ];
        let result = UpdateResult::with_changes("Imported plan", planner.summary(), changes);
        text_result(result.to_string())
    }
}
