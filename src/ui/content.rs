// Active page content panel.
// Shows the page body placeholder and the Previous/Next controls.

use ratatui::{prelude::*, widgets::*};

use crate::state::{FormBuilder, Step};

use super::hit::{HitMap, HitTarget};

const PREVIOUS_LABEL: &str = "◀ Previous";
const NEXT_LABEL: &str = "Next ▶";

/// Draw the active page and record the navigation controls.
pub fn draw_content(frame: &mut Frame, builder: &FormBuilder, area: Rect, hits: &mut HitMap) {
    let store = builder.store();
    let page = store.active();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} Content ", page.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Position
            Constraint::Length(1), // Field label
            Constraint::Length(3), // Field input
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let position = Paragraph::new(format!(
        "Page {} of {}",
        store.active_index() + 1,
        store.len()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(position, chunks[0]);

    let label = Paragraph::new(Span::styled(
        "Default Field",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, chunks[1]);

    let input = Paragraph::new("Enter information")
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(input, chunks[2]);

    draw_controls(frame, builder, chunks[4], hits);
}

fn draw_controls(frame: &mut Frame, builder: &FormBuilder, area: Rect, hits: &mut HitMap) {
    let style_for = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let prev_width = (PREVIOUS_LABEL.chars().count() as u16).min(area.width);
    let next_width = (NEXT_LABEL.chars().count() as u16).min(area.width);
    let prev_area = Rect::new(area.x, area.y, prev_width, area.height.min(1));
    let next_area = Rect::new(
        area.right().saturating_sub(next_width),
        area.y,
        next_width,
        area.height.min(1),
    );

    let prev = Paragraph::new(PREVIOUS_LABEL).style(style_for(builder.can_step(Step::Previous)));
    let next = Paragraph::new(NEXT_LABEL).style(style_for(builder.can_step(Step::Next)));
    frame.render_widget(prev, prev_area);
    frame.render_widget(next, next_area);

    hits.push(prev_area, HitTarget::Previous);
    hits.push(next_area, HitTarget::Next);
}
