// UI module for rendering the TUI.
// Contains the tab bar, todo list, snapshot view, console, and overlays.

mod data;
mod input;
mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::ConsoleLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    // Action-failure banner above the content; the console tab already
    // shows the full log, so it gets no banner.
    let content_area = if app.last_error.is_some() && app.active_tab != Tab::Console {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(chunks[1]);
        draw_error_banner(frame, app, split[0]);
        split[1]
    } else {
        chunks[1]
    };

    draw_content(frame, app, content_area);
    draw_status_bar(frame, app, chunks[2]);

    // Overlays are rendered last, on top of everything.
    if app.todos.input.visible {
        input::draw_input_modal(frame, &app.todos.input);
    }

    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Todos => list::render_todos_list(frame, &mut app.todos, area),
        Tab::Data => data::draw_data_tab(frame, &mut app.data, area),
        Tab::Console => draw_console_tab(frame, app, area),
    }
}

/// Draw the banner for the most recent failed action.
fn draw_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let message = app.last_error.as_deref().unwrap_or_default();
    let banner = Paragraph::new(format!("❌ {}", message))
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

/// Draw the Console tab with the activity log.
fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if app.console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
    } else {
        let items: Vec<ListItem> = app
            .console
            .messages
            .iter()
            .map(|msg| {
                let (icon, color) = match msg.level {
                    ConsoleLevel::Error => ("❌", Color::Red),
                    ConsoleLevel::Info => ("ℹ️", Color::Cyan),
                };

                let time = list::format_relative_time(&msg.timestamp);

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", icon)),
                    Span::styled(time, Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(msg.message.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, area, &mut app.console.list_state);
    }
}

/// Draw the status bar with keybinding hints and the API address.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = if app.todos.input.visible {
        vec![
            Span::raw(" ↵ "),
            Span::styled("Add", Style::default().fg(Color::DarkGray)),
            Span::raw("  ←→ "),
            Span::styled("Cursor", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Cancel", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        match app.active_tab {
            Tab::Todos => vec![
                Span::raw(" ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
                Span::raw("  Space "),
                Span::styled("Toggle", Style::default().fg(Color::DarkGray)),
                Span::raw("  a "),
                Span::styled("Add", Style::default().fg(Color::DarkGray)),
                Span::raw("  d "),
                Span::styled("Delete", Style::default().fg(Color::DarkGray)),
                Span::raw("  r "),
                Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
                Span::raw("  Tab "),
                Span::styled("Switch", Style::default().fg(Color::DarkGray)),
                Span::raw("  ? "),
                Span::styled("Help", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
            Tab::Data => vec![
                Span::raw(" ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
                Span::raw("  c "),
                Span::styled("Clear cache", Style::default().fg(Color::DarkGray)),
                Span::raw("  r "),
                Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
                Span::raw("  Tab "),
                Span::styled("Switch", Style::default().fg(Color::DarkGray)),
                Span::raw("  ? "),
                Span::styled("Help", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
            Tab::Console => vec![
                Span::raw(" ↑↓ "),
                Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
                Span::raw("  Tab "),
                Span::styled("Switch", Style::default().fg(Color::DarkGray)),
                Span::raw("  ? "),
                Span::styled("Help", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
        }
    };

    hints.push(Span::styled(
        format!("  API: {}", app.client.base_url()),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 52;
    let popup_height = 17;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k  ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate list"),
        ]),
        Line::from(vec![
            Span::styled("  Space       ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle selected todo"),
        ]),
        Line::from(vec![
            Span::styled("  a           ", Style::default().fg(Color::Cyan)),
            Span::raw("Add a new todo"),
        ]),
        Line::from(vec![
            Span::styled("  d           ", Style::default().fg(Color::Cyan)),
            Span::raw("Delete selected todo"),
        ]),
        Line::from(vec![
            Span::styled("  r           ", Style::default().fg(Color::Cyan)),
            Span::raw("Refresh current view"),
        ]),
        Line::from(vec![
            Span::styled("  c           ", Style::default().fg(Color::Cyan)),
            Span::raw("Clear server cache (Data tab)"),
        ]),
        Line::from(vec![
            Span::styled("  Tab         ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch tabs"),
        ]),
        Line::from(vec![
            Span::styled("  Esc         ", Style::default().fg(Color::Cyan)),
            Span::raw("Close input / help"),
        ]),
        Line::from(vec![
            Span::styled("  ?           ", Style::default().fg(Color::Cyan)),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q           ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
