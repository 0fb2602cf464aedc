// Data tab rendering.
// Shows the server-computed snapshot: aggregate statistics, cache-timing
// metadata, and the item list.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::{DataTabState, LoadingState, SnapshotView};

use super::list::{render_empty, render_error, render_loading};

/// Format a timestamp in ISO 8601 with the local timezone.
fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let local: DateTime<chrono::Local> = dt.with_timezone(&chrono::Local);
    local.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

/// Draw the Data tab.
pub fn draw_data_tab(frame: &mut Frame, state: &mut DataTabState, area: Rect) {
    match &state.snapshot {
        LoadingState::Idle => render_empty(frame, area, "Press r to load the snapshot"),
        LoadingState::Loading => render_loading(frame, area, "Loading snapshot"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(view) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(10), Constraint::Min(1)])
                .split(area);

            draw_stats(frame, view, chunks[0]);
            draw_items(frame, view, &mut state.list_state, chunks[1]);
        }
    }
}

/// Draw the statistics and timing panel.
fn draw_stats(frame: &mut Frame, view: &SnapshotView, area: Rect) {
    let stats = &view.snapshot.stats;

    let label = Style::default().fg(Color::DarkGray);
    let (source_text, source_color) = if view.snapshot.from_cache {
        ("Redis cache", Color::Green)
    } else {
        ("primary store", Color::Yellow)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Total:        ", label),
            Span::styled(stats.total.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Completed:    ", label),
            Span::styled(stats.completed.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Pending:      ", label),
            Span::styled(stats.pending.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Completion:   ", label),
            Span::styled(
                format!("{:.1}%", stats.completion_rate),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Source:       ", label),
            Span::styled(source_text, Style::default().fg(source_color)),
        ]),
        Line::from(vec![
            Span::styled("Server load:  ", label),
            Span::styled(
                format!("{:.1} ms", view.snapshot.load_time),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Round trip:   ", label),
            Span::styled(
                format!("{} ms", view.round_trip.as_millis()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Generated:    ", label),
            Span::styled(
                format_timestamp(&view.snapshot.generated_at),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cache Snapshot "),
    );
    frame.render_widget(panel, area);
}

/// Draw the snapshot's item list.
fn draw_items(frame: &mut Frame, view: &SnapshotView, list_state: &mut ListState, area: Rect) {
    let todos = &view.snapshot.todos;

    if todos.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Items ");
        let text = Paragraph::new("Snapshot contains no todos")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = todos
        .iter()
        .map(|item| {
            let checkbox = if item.done { "[x]" } else { "[ ]" };
            let serialized = item
                .timestamp_utc()
                .map(|dt| format_timestamp(&dt))
                .unwrap_or_else(|| "-".to_string());

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", checkbox),
                    Style::default().fg(if item.done { Color::Green } else { Color::DarkGray }),
                ),
                Span::styled(item.title.clone(), Style::default().fg(Color::White)),
                Span::styled(format!("  {}", serialized), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Items ({}) ", todos.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list_state);
}
