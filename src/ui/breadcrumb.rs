// Breadcrumb rendering for the builder header.
// Shows the form and active page, with the page position on the right.

use ratatui::{prelude::*, widgets::*};

/// Render the breadcrumb trail with an optional right-aligned note.
pub fn draw_breadcrumb(frame: &mut Frame, trail: &[&str], note: Option<&str>, area: Rect) {
    let mut spans = Vec::new();

    for (i, label) in trail.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == trail.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(label.to_string(), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    if let Some(note) = note {
        let note_para = Paragraph::new(Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(
            note_para,
            Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.min(1),
            },
        );
    }
}
