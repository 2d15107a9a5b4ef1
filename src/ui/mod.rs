//! Full-screen terminal UI
//!
//! The UI provides: an input form (description + due date), a checklist of
//! active tasks, a read-only list of completed tasks, and modal dialogs for
//! validation errors and reminders.
//!
//! Everything runs on one cooperative event loop. The recurring reminder
//! check is a deadline tested between key events on the same thread; the
//! store is exclusively owned by the loop, so no locking is involved
//! anywhere.

pub mod widgets;

use std::error::Error;
use std::time::Instant;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::config;
use crate::date::parse_due_date;
use crate::reminder;
use crate::store::TaskStore;

/// Fixed message of the validation error dialog
const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please ensure task and due date are correctly entered.";

/// How long the loop waits for a key before checking timers
const POLL_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(200);

/// Which part of the screen receives key strokes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Focus {
    /// The free-text description input
    Description,
    /// The `YYYY-MM-DD` due date input
    DueDate,
    /// The checklist of active tasks
    Tasks,
}

/// A modal dialog. While one is open it swallows every key except dismissal
/// (Enter or Esc), exactly like a blocking message box would.
#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    /// Validation error on add
    Error(String),
    /// Reminder notification
    Reminder(String),
}

/// UI state.
pub struct App {
    store: TaskStore,
    description_input: String,
    due_date_input: String,
    focus: Focus,
    /// Cursor position in the active checklist
    selected: usize,
    modal: Option<Modal>,
    last_reminder_check: Instant,
    should_quit: bool,
}

impl App {
    /// Create the UI around a task store.
    ///
    /// The store is moved in: the event loop is its only owner for the rest
    /// of the process lifetime.
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            description_input: String::new(),
            due_date_input: String::new(),
            focus: Focus::Description,
            selected: 0,
            modal: None,
            last_reminder_check: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop until the user quits.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn Error>> {
        loop {
            terminal.draw(|frame| {
                widgets::render(
                    frame,
                    &self.store,
                    &self.description_input,
                    &self.due_date_input,
                    self.focus,
                    self.selected,
                    self.modal.as_ref(),
                );
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code, key.modifiers);
                }
            }

            // The recurring reminder. A modal being open counts as "the user
            // is already looking at a dialog": the check is simply delayed
            // until it is dismissed.
            if self.modal.is_none()
                && self.last_reminder_check.elapsed() >= *config::REMINDER_INTERVAL
            {
                self.last_reminder_check = Instant::now();
                self.notify_upcoming_tasks();
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // An open modal blocks everything until dismissed
        if self.modal.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.modal = None;
            }
            return;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.cycle_focus(),
            _ => match self.focus {
                Focus::Description | Focus::DueDate => self.handle_form_key(code),
                Focus::Tasks => self.handle_checklist_key(code),
            },
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Description => Focus::DueDate,
            Focus::DueDate => Focus::Tasks,
            Focus::Tasks => Focus::Description,
        };
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let input = match self.focus {
            Focus::Description => &mut self.description_input,
            Focus::DueDate => &mut self.due_date_input,
            Focus::Tasks => return,
        };
        match code {
            KeyCode::Char(c) => {
                input.push(c);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => self.add_task_from_inputs(),
            _ => {}
        }
    }

    fn handle_checklist_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.notify_upcoming_tasks(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.store.active().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.complete_selected(),
            _ => {}
        }
    }

    /// The "Add task" action: validate both inputs, then append.
    ///
    /// On any validation failure an error dialog opens and both inputs keep
    /// their content, so the user can fix them in place. They are only
    /// cleared once the task has actually been added.
    fn add_task_from_inputs(&mut self) {
        let due_date = match parse_due_date(self.due_date_input.trim()) {
            Ok(date) => date,
            Err(err) => {
                log::debug!("Rejecting due date {:?}: {}", self.due_date_input, err);
                self.modal = Some(Modal::Error(INVALID_INPUT_MESSAGE.to_string()));
                return;
            }
        };

        match self.store.add_task(&self.description_input, due_date) {
            Ok(_) => {
                self.description_input.clear();
                self.due_date_input.clear();
            }
            Err(err) => {
                log::debug!("Rejecting task: {}", err);
                self.modal = Some(Modal::Error(INVALID_INPUT_MESSAGE.to_string()));
            }
        }
    }

    /// Check the task under the cursor: completes it and moves its label to
    /// the completed list. One-way, there is no unchecking.
    fn complete_selected(&mut self) {
        let id = match self.store.active().get(self.selected) {
            Some(task) => task.id().clone(),
            None => return,
        };
        self.store.complete_task(&id);

        // Keep the cursor on a valid row
        let remaining = self.store.active().len();
        if self.selected >= remaining {
            self.selected = remaining.saturating_sub(1);
        }
    }

    /// The "Notify" action, also fired by the recurring timer: when some
    /// tasks are due today (or overdue), open a reminder dialog listing them.
    /// Nothing is shown when no task matches.
    fn notify_upcoming_tasks(&mut self) {
        let today = Local::now().date_naive();
        let message = {
            let due = reminder::upcoming(self.store.active(), today);
            if due.is_empty() {
                None
            } else {
                Some(reminder::reminder_message(&due))
            }
        };
        if let Some(message) = message {
            self.modal = Some(Modal::Reminder(message));
        }
    }
}
