//! Top navigation bar.
//!
//! Carries the site title and the section links. Past the scroll
//! threshold it switches to its elevated style, like a site header
//! gaining its backdrop once the user scrolls.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, SectionId};
use crate::view::theme::colors;

/// Renders the navbar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let scrolled = app.scroll.is_scrolled();

    let (bar_style, link_style) = if scrolled {
        (
            Style::default().bg(c.accent).fg(c.selected_fg),
            Style::default()
                .bg(c.accent)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(c.fg), Style::default().fg(c.muted))
    };

    let mut spans = vec![Span::styled(
        " termfolio ",
        bar_style.add_modifier(Modifier::BOLD),
    )];
    for section in SectionId::ORDER {
        spans.push(Span::styled("  ", bar_style));
        spans.push(Span::styled(section.label(), link_style));
    }
    spans.push(Span::styled("   [m] menu", bar_style));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);
}
