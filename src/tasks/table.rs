use std::collections::BTreeMap;

use crate::error::TaskError;
use crate::tasks::{Status, Task};

/// Mapping from task name to task.
///
/// Names are unique and compared byte-for-byte. Iteration is ordered by name.
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    tasks: BTreeMap<String, Task>,
}

impl TaskTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new task.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::DuplicateName` if a task with the same name exists.
    /// The existing task is left untouched.
    pub fn insert(&mut self, task: Task) -> Result<&Task, TaskError> {
        if self.tasks.contains_key(&task.name) {
            return Err(TaskError::DuplicateName(task.name));
        }
        let name = task.name.clone();
        Ok(self.tasks.entry(name).or_insert(task))
    }

    /// Remove a task by name.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` if no task has that name.
    pub fn remove(&mut self, name: &str) -> Result<Task, TaskError> {
        self.tasks
            .remove(name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))
    }

    /// Change the status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` if no task has that name.
    pub fn set_status(&mut self, name: &str, status: Status) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .get_mut(name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
        task.status = status;
        Ok(task)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = TaskTable::new();
        table.insert(Task::new("a", "first")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a").unwrap().description, "first");
        assert!(table.get("A").is_none());
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut table = TaskTable::new();
        table.insert(Task::new("a", "first")).unwrap();
        let err = table.insert(Task::new("a", "second")).unwrap_err();
        assert!(matches!(err, TaskError::DuplicateName(ref n) if n == "a"));
        assert_eq!(table.get("a").unwrap().description, "first");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut table = TaskTable::new();
        assert!(matches!(table.remove("ghost"), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_set_status() {
        let mut table = TaskTable::new();
        table.insert(Task::new("a", "first")).unwrap();
        let task = table.set_status("a", Status::Done).unwrap();
        assert_eq!(task.status, Status::Done);
        assert!(matches!(
            table.set_status("b", Status::Done),
            Err(TaskError::NotFound(_))
        ));
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut table = TaskTable::new();
        table.insert(Task::new("b", "")).unwrap();
        table.insert(Task::new("a", "")).unwrap();
        table.insert(Task::new("C", "")).unwrap();
        let names: Vec<_> = table.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["C", "a", "b"]);
    }
}
