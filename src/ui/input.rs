// New-todo input modal.
// A centered input box with a character cursor, drawn on top of the list.

use ratatui::{prelude::*, widgets::*};

use crate::state::InputState;

/// Draw the new-todo input modal on top of the current view.
pub fn draw_input_modal(frame: &mut Frame, input: &InputState) {
    let area = frame.area();

    let modal_width = 60.min(area.width.saturating_sub(4));
    let modal_height = 5;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and input
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    // Input section with the cursor rendered at its character position.
    let chars: Vec<char> = input.buffer.chars().collect();
    let before: String = chars[..input.cursor].iter().collect();
    let after: String = chars[input.cursor..].iter().collect();

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" New Todo ");

    let input_line = Line::from(vec![
        Span::styled("Title: ", Style::default().fg(Color::DarkGray)),
        Span::raw(before),
        Span::styled("█", Style::default().fg(Color::Yellow)),
        Span::raw(after),
    ]);

    let input_widget = Paragraph::new(input_line).block(input_block);
    frame.render_widget(input_widget, chunks[0]);

    // Instructions
    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Add  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[1]);
}
