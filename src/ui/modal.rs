// Modal UI components.
// Rename prompt and the per-page context menu.

use ratatui::{prelude::*, widgets::*};

use crate::state::ContextMenu;

use super::hit::{HitMap, HitTarget};

/// Draw the rename prompt on top of the current view.
pub fn draw_rename_modal(frame: &mut Frame, current: &str, input: &str) {
    let area = frame.area();

    // Create centered modal
    let modal_width = area.width.min(50);
    let modal_height = area.height.min(6);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and input
            Constraint::Min(1),    // Instructions
        ])
        .split(modal_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Rename \"{}\" ", current));

    let input_line = Line::from(vec![
        Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
        Span::raw(input),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let input_widget = Paragraph::new(input_line).block(input_block);
    frame.render_widget(input_widget, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Rename  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(instructions_widget, chunks[1]);
}

/// Draw the context menu just below `anchor`, keeping it on screen.
pub fn draw_context_menu(frame: &mut Frame, menu: &ContextMenu, anchor: Rect, hits: &mut HitMap) {
    let area = frame.area();

    let label_width = menu
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0) as u16;
    // Borders, highlight symbol, label, shortcut.
    let width = (label_width + 8).min(area.width);
    let height = (menu.items.len() as u16 + 2).min(area.height);

    let x = anchor.x.min(area.right().saturating_sub(width));
    let below = anchor.bottom();
    let y = if below + height <= area.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height)
    };
    let menu_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, menu_area);
    menu.listener().set_area(menu_area);

    let items: Vec<ListItem> = menu
        .items
        .iter()
        .map(|item| {
            let label_style = if item.destructive {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", item.label, width = label_width as usize),
                    label_style,
                ),
                Span::styled(
                    format!("  {}", item.shortcut),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(menu_area);

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(menu.selected));
    frame.render_stateful_widget(list_widget, menu_area, &mut list_state);

    for (index, row) in (inner.y..inner.bottom()).enumerate().take(menu.items.len()) {
        hits.push(
            Rect::new(inner.x, row, inner.width, 1),
            HitTarget::MenuItem(index),
        );
    }
}
