//! Navigation menu overlay.
//!
//! Centered over the document while open; document scrolling is locked
//! underneath it.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::model::{App, SectionId};
use crate::view::theme::{colors, Styles};

/// Renders the overlay.
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(28, SectionId::ORDER.len() as u16 + 2, frame.area());

    let block = Block::default()
        .title(" Navigation ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent));

    let items: Vec<ListItem> = SectionId::ORDER
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let is_selected = index == app.menu.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{}", section.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.menu.selected));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// A rect of the given size centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
