use serde::{Deserialize, Serialize};

use crate::core::Locale;

/// A named task record.
///
/// The name is fixed at creation. Only the status changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub status: Status,
}

impl Task {
    /// Create a new task in the [`Status::Pending`] state.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: Status::Pending,
        }
    }

    /// One-line rendering used by `show_task`.
    #[must_use]
    pub fn summary(&self, locale: Locale) -> String {
        format!(
            "{}: {} (Status: {})",
            self.name,
            self.description,
            self.status.label(locale)
        )
    }
}

/// Task progress. Always one of three values, never free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl Status {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Canonical label for this status in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Pending) => "pending",
            (Locale::En, Self::InProgress) => "in_progress",
            (Locale::En, Self::Done) => "done",
            (Locale::Pt, Self::Pending) => "pendente",
            (Locale::Pt, Self::InProgress) => "em andamento",
            (Locale::Pt, Self::Done) => "finalizado",
        }
    }

    /// Look up a status by its exact, case-sensitive label.
    #[must_use]
    pub fn from_label(label: &str, locale: Locale) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label(locale) == label)
    }

    /// The three labels of a locale, in lifecycle order.
    #[must_use]
    pub fn labels(locale: Locale) -> Vec<String> {
        Self::ALL
            .iter()
            .map(|s| s.label(locale).to_string())
            .collect()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("X", "write spec");
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.name, "X");
        assert_eq!(task.description, "write spec");
    }

    #[test]
    fn test_summary() {
        let mut task = Task::new("X", "write spec");
        task.status = Status::InProgress;
        assert_eq!(task.summary(Locale::En), "X: write spec (Status: in_progress)");
        assert_eq!(task.summary(Locale::Pt), "X: write spec (Status: em andamento)");
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Status::from_label("done", Locale::En), Some(Status::Done));
        assert_eq!(Status::from_label("Done", Locale::En), None);
        assert_eq!(Status::from_label(" done", Locale::En), None);
        assert_eq!(Status::from_label("finalizado", Locale::En), None);
        assert_eq!(
            Status::from_label("em andamento", Locale::Pt),
            Some(Status::InProgress)
        );
    }

    #[test]
    fn test_labels_order() {
        assert_eq!(Status::labels(Locale::En), vec!["pending", "in_progress", "done"]);
        assert_eq!(
            Status::labels(Locale::Pt),
            vec!["pendente", "em andamento", "finalizado"]
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
