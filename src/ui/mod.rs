// UI module for rendering the TUI.
// Lays out the view bar, page content, page strip, overlays, and status bar.

mod breadcrumb;
mod console;
mod content;
pub mod hit;
mod modal;
pub mod strip;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};

use hit::HitTarget;

/// Main draw function that renders the entire UI.
/// Rebuilds the hit map as a side effect.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.hit_map.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View bar
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(10),   // Page content
            Constraint::Length(5), // Page strip
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    match app.active_view {
        View::Builder => {
            let store = app.builder.store();
            let name = store.active().name.clone();
            let position = format!("Page {} of {}", store.active_index() + 1, store.len());
            breadcrumb::draw_breadcrumb(
                frame,
                &["Form Builder", name.as_str()],
                Some(position.as_str()),
                chunks[1],
            );

            content::draw_content(frame, &app.builder, chunks[2], &mut app.hit_map);
            let snapshot = app.builder.snapshot();
            strip::draw_strip(frame, &snapshot, chunks[3], &mut app.hit_map);

            if let Some(menu) = &app.menu {
                let anchor = app
                    .builder
                    .store()
                    .position(menu.target)
                    .and_then(|index| app.hit_map.area_of(HitTarget::TabHandle(index)))
                    .unwrap_or(chunks[3]);
                modal::draw_context_menu(frame, menu, anchor, &mut app.hit_map);
            }
        }
        View::Console => {
            let block = Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(block, chunks[1]);
            console::draw_console(frame, &mut app.console, chunks[2].union(chunks[3]));
        }
    }

    draw_status_bar(frame, app, chunks[4]);

    if let Some(prompt) = &app.rename {
        modal::draw_rename_modal(frame, &prompt.original, &prompt.input);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints for the current mode.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, action: &'static str| {
        [
            Span::raw(key),
            Span::styled(action, Style::default().fg(Color::DarkGray)),
        ]
    };

    let pairs = if app.keyboard_move {
        vec![
            hint(" ←→ ", "Target"),
            hint("  ↵ ", "Drop"),
            hint("  Esc ", "Cancel"),
        ]
    } else if app.menu.is_some() {
        vec![
            hint(" ↑↓ ", "Choose"),
            hint("  ↵ ", "Run"),
            hint("  Esc ", "Close"),
        ]
    } else if app.rename.is_some() {
        vec![hint(" ↵ ", "Rename"), hint("  Esc ", "Cancel")]
    } else if app.active_view == View::Console {
        vec![
            hint(" ↑↓ ", "Scroll"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
    } else {
        vec![
            hint(" ←→ ", "Page"),
            hint("  m ", "Move"),
            hint("  a ", "Add"),
            hint("  . ", "Menu"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
    };

    let mut spans: Vec<Span> = pairs.into_iter().flatten().collect();

    if app.builder.drag().is_dragging() && !app.keyboard_move {
        spans.push(Span::styled(
            "  dragging…",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = area.width.min(56);
    let popup_height = area.height.min(22);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let row = |keys: &'static str, action: &'static str| {
        Line::from(vec![Span::styled(keys, key_style), Span::raw(action)])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard & Mouse",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        row("  ←/→ or h/l    ", "Previous / next page"),
        row("  m             ", "Move active page (←/→, Enter, Esc)"),
        row("  a / A         ", "Add page after active / at end"),
        row("  r             ", "Rename active page"),
        row("  d / c         ", "Duplicate / copy active page"),
        row("  f             ", "Make active page first"),
        row("  x or Del      ", "Delete active page"),
        row("  .             ", "Open page menu"),
        row("  Tab           ", "Switch Builder / Console"),
        row("  ?             ", "Show/hide this help"),
        row("  q             ", "Quit"),
        Line::from(""),
        row("  Click tab     ", "Select page"),
        row("  Drag tab      ", "Reorder pages"),
        row("  Click ⋮ / +   ", "Page menu / insert page"),
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
