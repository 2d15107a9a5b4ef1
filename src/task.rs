//! To-do tasks and their identity

use std::fmt::{Display, Formatter};

use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Opaque, stable identifier for a task.
///
/// Looking tasks up by their rendered label is ambiguous as soon as two tasks
/// share a description and a due date, so every task gets a synthetic id at
/// creation time. This id is what the UI hands back when completing a task.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    /// Synthetic identity, unique within a store
    id: TaskId,

    /// What there is to do. Never empty: tasks are only created through
    /// [`TaskStore::add_task`](crate::TaskStore::add_task), which validates it
    description: String,

    /// The day this task is due. A plain calendar date: no time component, no timezone
    due_date: NaiveDate,

    /// The time this task was created. Informational only, not part of the task's identity
    creation_date: NaiveDateTime,
}

impl Task {
    /// Create a brand new task with a fresh random id.
    pub(crate) fn new(description: String, due_date: NaiveDate) -> Self {
        Self {
            id: TaskId::random(),
            description,
            due_date,
            creation_date: Local::now().naive_local(),
        }
    }

    pub fn id(&self) -> &TaskId         { &self.id          }
    pub fn description(&self) -> &str   { &self.description }
    pub fn due_date(&self) -> NaiveDate { self.due_date     }
    pub fn creation_date(&self) -> &NaiveDateTime { &self.creation_date }

    /// The canonical rendered form of a task: `"<description> (Due: YYYY-MM-DD)"`.
    ///
    /// This string is used everywhere the task is displayed, and doubles as
    /// the lookup key of [`TaskStore::complete_task_by_label`](crate::TaskStore::complete_task_by_label).
    pub fn label(&self) -> String {
        format!("{} (Due: {})", self.description, self.due_date.format("%Y-%m-%d"))
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}
