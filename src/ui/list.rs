// Todo list rendering.
// Provides the styled list view with loading, error, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::{LoadingState, TodosTabState};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the todo list.
pub fn render_todos_list(frame: &mut Frame, state: &mut TodosTabState, area: Rect) {
    match &state.list {
        LoadingState::Idle => render_empty(frame, area, "Press r to load"),
        LoadingState::Loading => render_loading(frame, area, "Loading todos"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(todos) => {
            if todos.is_empty() {
                render_empty(frame, area, "No todos yet. Press a to add one.");
            } else {
                let items: Vec<ListItem> = todos
                    .iter()
                    .map(|todo| {
                        let checkbox = if todo.done { "[x]" } else { "[ ]" };
                        let title_style = if todo.done {
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::CROSSED_OUT)
                        } else {
                            Style::default().fg(Color::White)
                        };

                        let created = todo
                            .created_at_utc()
                            .map(|dt| format_relative_time(&dt))
                            .unwrap_or_else(|| "-".to_string());

                        ListItem::new(Line::from(vec![
                            Span::styled(
                                format!("{} ", checkbox),
                                Style::default().fg(if todo.done {
                                    Color::Green
                                } else {
                                    Color::DarkGray
                                }),
                            ),
                            Span::styled(todo.title.clone(), title_style),
                            Span::styled(
                                format!("  {}", created),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]))
                    })
                    .collect();

                let list_widget = List::new(items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!(" Todos ({}) ", todos.len())),
                    )
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list_widget, area, &mut state.list_state);
            }
        }
    }
}
