//! JSON output formatting for tasklang.

use serde_json::json;

use crate::core::{Locale, Outcome};
use crate::error::TaskError;

/// Format an outcome as JSON
///
/// # Errors
///
/// Returns `TaskError::Json` if JSON serialization fails.
pub fn format_outcome_json(outcome: &Outcome, locale: Locale) -> Result<String, TaskError> {
    let output = json!({
        "ok": true,
        "action": outcome.action(),
        "message": outcome.message(locale),
        "task": outcome.task(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an error as JSON
///
/// # Errors
///
/// Returns `TaskError::Json` if JSON serialization fails.
pub fn format_error_json(err: &TaskError) -> Result<String, TaskError> {
    let output = json!({
        "ok": false,
        "error": err.kind(),
        "message": err.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
