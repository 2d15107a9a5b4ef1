//! The in-memory task store

use chrono::NaiveDate;
use thiserror::Error;

use crate::task::{Task, TaskId};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AddTaskError {
    /// The description was empty (or only whitespace)
    #[error("a task needs a non-empty description")]
    EmptyDescription,
}

/// Holds every task of a running session.
///
/// Active tasks keep their insertion order. Completed tasks survive only as
/// their rendered labels, in completion order: completion is a one-way
/// projection, a completed task can neither be edited nor re-activated.
///
/// Nothing is persisted anywhere, the whole list lives and dies with the
/// process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<String>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new task to the active list.
    ///
    /// The description is trimmed and must not end up empty. No duplicate
    /// detection is performed: two tasks may well share a description and a
    /// due date, they still get distinct [`TaskId`]s.
    pub fn add_task(&mut self, description: &str, due_date: NaiveDate) -> Result<&Task, AddTaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AddTaskError::EmptyDescription);
        }

        let task = Task::new(description.to_string(), due_date);
        log::debug!("Adding task {} as {}", task.id(), task.label());
        self.active.push(task);
        Ok(self.active.last().unwrap(/* this cannot panic, we just pushed an element */))
    }

    /// Mark the task with this id as completed.
    ///
    /// The task is removed from the active list and its rendered label is
    /// appended to the completed list. Completion is terminal, there is no
    /// way back to the active list.
    ///
    /// Returns `false` (and changes nothing) when no active task has this id.
    pub fn complete_task(&mut self, id: &TaskId) -> bool {
        match self.active.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.complete_at(index);
                true
            },
            None => {
                log::debug!("No active task with id {}, ignoring completion", id);
                false
            },
        }
    }

    /// Mark as completed the first active task whose rendered label equals `label`.
    ///
    /// This is the historical lookup. Labels are not unique: when several
    /// active tasks collide, only the first one (in insertion order) is
    /// completed and the others stay active. Prefer [`TaskStore::complete_task`],
    /// which cannot be ambiguous.
    ///
    /// Returns `false` (and changes nothing) when no label matches.
    pub fn complete_task_by_label(&mut self, label: &str) -> bool {
        match self.active.iter().position(|task| task.label() == label) {
            Some(index) => {
                self.complete_at(index);
                true
            },
            None => {
                log::debug!("No active task labelled {:?}, ignoring completion", label);
                false
            },
        }
    }

    fn complete_at(&mut self, index: usize) {
        let task = self.active.remove(index);
        log::debug!("Completed task {} ({})", task.id(), task.label());
        self.completed.push(task.label());
    }

    /// The active tasks, in insertion order
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// The labels of completed tasks, in completion order
    pub fn completed(&self) -> &[String] {
        &self.completed
    }
}
