//! UI widget rendering: input form, checklist, completed list, status bar,
//! modal dialogs.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::{Focus, Modal};
use crate::store::TaskStore;

/// Main layout rendering.
pub fn render(
    frame: &mut Frame,
    store: &TaskStore,
    description_input: &str,
    due_date_input: &str,
    focus: Focus,
    selected: usize,
    modal: Option<&Modal>,
) {
    let [header_area, description_area, due_date_area, tasks_area, completed_area, status_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " corkboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to-do list"),
    ]));
    frame.render_widget(header, header_area);

    // Input form
    frame.render_widget(
        input_widget("Task", description_input, focus == Focus::Description),
        description_area,
    );
    frame.render_widget(
        input_widget("Due date (YYYY-MM-DD)", due_date_input, focus == Focus::DueDate),
        due_date_area,
    );

    // Active checklist
    let checklist_focused = focus == Focus::Tasks;
    let task_lines: Vec<Line> = store
        .active()
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let style = if checklist_focused && index == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("[ ] {}", task.label()), style))
        })
        .collect();
    let tasks_widget = Paragraph::new(task_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tasks ")
            .border_style(border_style(checklist_focused)),
    );
    frame.render_widget(tasks_widget, tasks_area);

    // Completed list, read-only
    let completed_lines: Vec<Line> = store
        .completed()
        .iter()
        .map(|label| {
            Line::from(Span::styled(
                format!("[x] {label}"),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    let completed_widget = Paragraph::new(completed_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Completed tasks ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(completed_widget, completed_area);

    // Status bar
    let status = Paragraph::new(Line::from(vec![
        hint("Tab", "switch focus"),
        Span::raw(" | "),
        hint("Enter", "add task"),
        Span::raw(" | "),
        hint("Space", "complete"),
        Span::raw(" | "),
        hint("n", "notify"),
        Span::raw(" | "),
        hint("Esc", "quit"),
    ]));
    frame.render_widget(status, status_area);

    // A modal dialog covers everything else and is rendered last
    if let Some(modal) = modal {
        render_modal(frame, modal);
    }
}

fn input_widget<'a>(title: &'a str, content: &'a str, focused: bool) -> Paragraph<'a> {
    Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(border_style(focused)),
    )
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn hint<'a>(key: &'a str, action: &'a str) -> Span<'a> {
    Span::styled(
        format!(" {key}: {action} "),
        Style::default().fg(Color::DarkGray),
    )
}

fn render_modal(frame: &mut Frame, modal: &Modal) {
    let (title, text, color) = match modal {
        Modal::Error(message) => (" Error ", message, Color::Red),
        Modal::Reminder(message) => (" Task Reminder ", message, Color::Blue),
    };

    let lines: Vec<Line> = text
        .lines()
        .map(|line| Line::from(line.to_string()))
        .chain(std::iter::once(Line::from(Span::styled(
            "(Enter to dismiss)",
            Style::default().fg(Color::DarkGray),
        ))))
        .collect();
    // Borders plus the dismissal hint
    let height = lines.len() as u16 + 2;

    let area = centered(frame.area(), 60, height);
    frame.render_widget(Clear, area);
    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(dialog, area);
}

/// A centered rectangle of the given percentage width and fixed height.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
