//! Error types for tasklang.

use thiserror::Error;

use crate::core::LexError;

/// Every failure a statement or the surrounding CLI can produce.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The statement could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token sequence does not match any command form.
    #[error("Syntax error at line {line}: expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        line: usize,
    },

    /// `create_task` on a name that is already in the table.
    #[error("A task named '{0}' already exists")]
    DuplicateName(String),

    /// The named task is not in the table.
    #[error("Task '{0}' not found")]
    NotFound(String),

    /// `set_status` with a value outside the canonical labels.
    #[error("Invalid status '{value}', must be one of: {}", .allowed.join(", "))]
    InvalidStatus { value: String, allowed: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// Stable tag for machine-readable output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex_error",
            Self::Syntax { .. } => "syntax_error",
            Self::DuplicateName(_) => "duplicate_name",
            Self::NotFound(_) => "not_found",
            Self::InvalidStatus { .. } => "invalid_status",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }

    /// Whether the statement was rejected before reaching the task table.
    #[must_use]
    pub const fn is_rejected_statement(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Syntax { .. })
    }
}
