// View bar at the top of the screen.
// Builder and Console views; the Console title carries the unread badge.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};

const VIEWS: [View; 2] = [View::Builder, View::Console];

/// Title line for one view. Only the Console view has a badge.
fn view_title(view: View, active: bool, badge: Option<&str>) -> Line<'static> {
    let name_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(view.title(), name_style)];
    if let (View::Console, Some(badge)) = (view, badge) {
        spans.push(Span::styled(
            format!(" ●{badge}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

/// Draw the view bar.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let badge = app.console.badge();
    let titles = VIEWS
        .into_iter()
        .map(|view| view_title(view, view == app.active_view, badge.as_deref()));
    let selected = VIEWS
        .iter()
        .position(|view| *view == app.active_view)
        .unwrap_or(0);

    let bar = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" folio ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));

    frame.render_widget(bar, area);
}
