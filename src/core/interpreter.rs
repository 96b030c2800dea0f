//! Statement execution against an owned task table.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{Command, Lexer, Locale, Parser};
use crate::error::TaskError;
use crate::tasks::{Status, Task, TaskTable};

/// Result of a successfully executed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "task", rename_all = "snake_case")]
pub enum Outcome {
    Created(Task),
    Deleted(Task),
    StatusChanged(Task),
    Shown(Task),
    /// The statement held no tokens.
    Empty,
}

impl Outcome {
    /// The task the statement acted on, as it was after the statement.
    ///
    /// For `Deleted` this is the removed task.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        match self {
            Self::Created(task) | Self::Deleted(task) | Self::StatusChanged(task) | Self::Shown(task) => {
                Some(task)
            },
            Self::Empty => None,
        }
    }

    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Deleted(_) => "deleted",
            Self::StatusChanged(_) => "status_changed",
            Self::Shown(_) => "shown",
            Self::Empty => "empty",
        }
    }

    /// Human-readable confirmation. Empty for [`Outcome::Empty`].
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::Created(task) => {
                format!("Task '{}' created: '{}'", task.name, task.description)
            },
            Self::Deleted(task) => format!("Task '{}' removed", task.name),
            Self::StatusChanged(task) => format!(
                "Status of task '{}' changed to '{}'",
                task.name,
                task.status.label(locale)
            ),
            Self::Shown(task) => task.summary(locale),
            Self::Empty => String::new(),
        }
    }
}

/// Owns a task table and executes statements against it, one at a time.
#[derive(Debug, Default)]
pub struct Interpreter {
    tasks: TaskTable,
    locale: Locale,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            tasks: TaskTable::new(),
            locale,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskTable {
        &self.tasks
    }

    /// Tokenize, parse and apply one statement.
    ///
    /// The table is only touched once the whole statement has been
    /// recognized, so a lexical or syntax error never leaves a partial change.
    ///
    /// # Errors
    ///
    /// - `TaskError::Lex` / `TaskError::Syntax` if the statement is malformed.
    /// - `TaskError::DuplicateName`, `TaskError::NotFound` or
    ///   `TaskError::InvalidStatus` if its precondition fails.
    pub fn execute(&mut self, statement: &str) -> Result<Outcome, TaskError> {
        let result = Parser::new(Lexer::new(statement, self.locale))
            .and_then(Parser::parse)
            .and_then(|command| match command {
                Some(command) => self.apply(command),
                None => Ok(Outcome::Empty),
            });

        if let Err(e) = &result {
            debug!(kind = e.kind(), error = %e, "statement failed");
        }
        result
    }

    /// Apply an already recognized command.
    ///
    /// # Errors
    ///
    /// Returns a semantic error if the command's precondition fails. The table
    /// is unchanged in that case.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, TaskError> {
        match command {
            Command::Create { name, description } => {
                let task = self.tasks.insert(Task::new(name, description))?;
                info!(name = %task.name, "task created");
                Ok(Outcome::Created(task.clone()))
            },
            Command::Delete { name } => {
                let task = self.tasks.remove(&name)?;
                info!(name = %task.name, "task deleted");
                Ok(Outcome::Deleted(task))
            },
            Command::SetStatus { name, status } => {
                if !self.tasks.contains(&name) {
                    return Err(TaskError::NotFound(name));
                }
                let status = Status::from_label(&status, self.locale).ok_or_else(|| {
                    TaskError::InvalidStatus {
                        value: status.clone(),
                        allowed: Status::labels(self.locale),
                    }
                })?;
                let task = self.tasks.set_status(&name, status)?;
                info!(name = %task.name, %status, "task status changed");
                Ok(Outcome::StatusChanged(task.clone()))
            },
            Command::Show { name } => self
                .tasks
                .get(&name)
                .cloned()
                .map(Outcome::Shown)
                .ok_or(TaskError::NotFound(name)),
        }
    }
}
