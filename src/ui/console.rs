// Console view rendering.
// Lists activity messages newest first with relative timestamps.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::{ConsoleLevel, ConsoleState};

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

/// Draw the Console view with activity messages.
pub fn draw_console(frame: &mut Frame, console: &mut ConsoleState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if console.messages.is_empty() {
        let text = Paragraph::new("No activity yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    // Show newest messages first (reverse order)
    let items: Vec<ListItem> = console
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let (icon, color) = match msg.level {
                ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                ConsoleLevel::Info => ("ℹ️", Color::Cyan),
            };

            let time = format_relative_time(&msg.timestamp);

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

    frame.render_stateful_widget(list_widget, area, &mut console.list_state);
}
