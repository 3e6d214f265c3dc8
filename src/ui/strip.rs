// Page tab strip rendering.
// One tab per page with a nested menu handle, and add buttons between tabs.

use ratatui::{prelude::*, widgets::*};

use crate::state::{BuilderSnapshot, Page};

use super::hit::{HitMap, HitTarget};

const ADD_BUTTON: &str = "─+─";
const HANDLE: &str = "⋮ ";

/// One laid-out strip element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripCell {
    pub area: Rect,
    pub target: HitTarget,
    pub text: String,
}

/// Lay out the strip on a single row. Cells past the right edge are dropped.
pub fn layout_strip(pages: &[Page], row: Rect) -> Vec<StripCell> {
    let mut cells = Vec::new();
    let mut x = row.x;

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            place(&mut cells, row, &mut x, ADD_BUTTON.to_string(), HitTarget::AddPage(index));
        }
        let label_start = x;
        place(&mut cells, row, &mut x, format!(" {} ", page.name), HitTarget::Tab(index));
        place(&mut cells, row, &mut x, HANDLE.to_string(), HitTarget::TabHandle(index));
        // The tab's zone spans its label and handle.
        if let Some(tab) = cells.iter_mut().find(|c| c.target == HitTarget::Tab(index)) {
            tab.area.width = x.min(row.right()).saturating_sub(label_start);
        }
    }
    place(
        &mut cells,
        row,
        &mut x,
        ADD_BUTTON.to_string(),
        HitTarget::AddPage(pages.len()),
    );

    cells
}

fn place(cells: &mut Vec<StripCell>, row: Rect, x: &mut u16, text: String, target: HitTarget) {
    let width = Span::raw(text.as_str()).width() as u16;
    let right = row.right();
    if *x < right {
        let area = Rect::new(*x, row.y, width.min(right - *x), 1);
        cells.push(StripCell { area, target, text });
    }
    *x = x.saturating_add(width);
}

/// Draw the page strip and record its hit regions.
pub fn draw_strip(frame: &mut Frame, snapshot: &BuilderSnapshot, area: Rect, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Pages ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let cells = layout_strip(snapshot.pages, row);

    let mut spans = Vec::with_capacity(cells.len());
    for cell in &cells {
        hits.push(cell.area, cell.target);
        spans.push(Span::styled(cell.text.clone(), cell_style(snapshot, cell.target)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn cell_style(snapshot: &BuilderSnapshot, target: HitTarget) -> Style {
    let index = match target {
        HitTarget::Tab(index) | HitTarget::TabHandle(index) => index,
        _ => return Style::default().fg(Color::DarkGray),
    };
    let Some(page) = snapshot.pages.get(index) else {
        return Style::default();
    };

    let mut style = if page.id() == snapshot.active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if matches!(target, HitTarget::TabHandle(_)) {
        style = style.fg(Color::DarkGray);
    }
    if snapshot.drag.source == Some(page.id()) {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
    }
    if snapshot.drag.highlight == Some(index) {
        style = style.bg(Color::Blue);
    }
    style
}
