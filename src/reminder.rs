//! The reminder filter
//!
//! A pure scan over the active tasks, run by the UI on its cooperative timer
//! and on explicit request. It has no state of its own.

use chrono::{Duration, NaiveDate};

use crate::task::Task;

/// Fixed header line of the notification message
pub const REMINDER_HEADER: &str = "Upcoming tasks:";

/// Returns the tasks that are worth a reminder on `today`, in input order.
///
/// A task matches when it is due on `today` or before `today + 1 day`. The
/// two conditions overlap ("due today" already falls before tomorrow), so the
/// effective window is `due_date <= today`: a task due tomorrow or later is
/// never returned, however close. This exact threshold is kept on purpose,
/// do not widen it.
pub fn upcoming<'t>(tasks: &'t [Task], today: NaiveDate) -> Vec<&'t Task> {
    let tomorrow = today + Duration::days(1);
    tasks.iter()
        .filter(|task| task.due_date() == today || task.due_date() < tomorrow)
        .collect()
}

/// Build the notification body: the fixed [`REMINDER_HEADER`] line, then one
/// rendered label per line.
///
/// Callers are expected to display this only when `tasks` is non-empty.
pub fn reminder_message(tasks: &[&Task]) -> String {
    let mut message = String::from(REMINDER_HEADER);
    for task in tasks {
        message.push('\n');
        message.push_str(&task.label());
    }
    message
}
