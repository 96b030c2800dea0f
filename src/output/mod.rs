//! Output formatting for tasklang.
//!
//! This module renders statement outcomes and errors in the selected format.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{Locale, Outcome};
use crate::error::TaskError;

pub use json::*;
pub use pretty::*;

/// Format a statement outcome based on output format
///
/// # Errors
///
/// Returns `TaskError::Json` if JSON serialization fails.
pub fn format_outcome(
    outcome: &Outcome,
    format: OutputFormat,
    locale: Locale,
) -> Result<String, TaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_outcome_pretty(outcome, locale)),
        OutputFormat::Json => format_outcome_json(outcome, locale),
    }
}

/// Format an error based on output format
///
/// # Errors
///
/// Returns `TaskError::Json` if JSON serialization fails.
pub fn format_error(err: &TaskError, format: OutputFormat) -> Result<String, TaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_error_pretty(err)),
        OutputFormat::Json => format_error_json(err),
    }
}
