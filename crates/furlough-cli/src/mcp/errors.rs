//! Error handling utilities for MCP server

use furlough_core::PlannerError;
use rmcp::ErrorData;

/// Converts a planner error, reporting bad input as invalid parameters.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        PlannerError::InvalidInput { .. } | PlannerError::Serialization { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
