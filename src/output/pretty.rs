use colored::{ColoredString, Colorize};

use crate::core::{Locale, Outcome};
use crate::error::TaskError;
use crate::tasks::{Status, Task};

/// Format an outcome as a single human-readable line
pub fn format_outcome_pretty(outcome: &Outcome, locale: Locale) -> String {
    match outcome {
        Outcome::Created(task) => format!(
            "{} '{}' created: '{}'",
            "Task".green(),
            task.name.bold(),
            task.description
        ),
        Outcome::Deleted(task) => format!("{} '{}' removed", "Task".red(), task.name.bold()),
        Outcome::StatusChanged(task) => format!(
            "Status of task '{}' changed to '{}'",
            task.name.bold(),
            status_label(task.status, locale)
        ),
        Outcome::Shown(task) => format_task_pretty(task, locale),
        Outcome::Empty => String::new(),
    }
}

/// Format a task as `name: description (Status: label)`
pub fn format_task_pretty(task: &Task, locale: Locale) -> String {
    format!(
        "{}: {} (Status: {})",
        task.name.bold(),
        task.description,
        status_label(task.status, locale)
    )
}

/// Format an error with a red prefix
pub fn format_error_pretty(err: &TaskError) -> String {
    format!("{}: {}", "error".red().bold(), err)
}

fn status_label(status: Status, locale: Locale) -> ColoredString {
    let label = status.label(locale);
    match status {
        Status::Pending => label.yellow(),
        Status::InProgress => label.cyan(),
        Status::Done => label.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_matches_plain_message_without_color() {
        colored::control::set_override(false);

        let mut task = Task::new("X", "write spec");
        for outcome in [
            Outcome::Created(task.clone()),
            Outcome::Deleted(task.clone()),
            Outcome::Shown(task.clone()),
        ] {
            assert_eq!(
                format_outcome_pretty(&outcome, Locale::En),
                outcome.message(Locale::En)
            );
        }

        task.status = Status::Done;
        let outcome = Outcome::StatusChanged(task);
        assert_eq!(
            format_outcome_pretty(&outcome, Locale::Pt),
            "Status of task 'X' changed to 'finalizado'"
        );

        colored::control::unset_override();
    }

    #[test]
    fn test_error_pretty_contains_message() {
        let out = format_error_pretty(&TaskError::DuplicateName("X".into()));
        assert!(out.contains("A task named 'X' already exists"));
    }
}
