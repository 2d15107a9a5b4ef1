//! This crate provides a small single-user to-do list.
//!
//! Tasks have a free-text description and a `YYYY-MM-DD` due date, and live in
//! an in-memory [`TaskStore`]: an ordered list of active tasks, plus the
//! rendered labels of completed ones. The [`reminder`] module is a pure filter
//! over the active tasks that selects those due today or overdue.
//!
//! The [`ui`] module wraps the store in a full-screen terminal UI: an input
//! form, a checklist of active tasks, a read-only completed list, and modal
//! dialogs for validation errors and reminders. Everything runs on a single
//! cooperative event loop; the recurring reminder check is a deadline polled
//! between key events, not a background thread.
//!
//! Nothing is ever persisted: the list lives and dies with the process.

pub mod config;
pub mod date;
mod task;
pub use task::Task;
pub use task::TaskId;
mod store;
pub use store::AddTaskError;
pub use store::TaskStore;
pub mod reminder;
pub mod ui;
