//! Work section: the project list, dimmed until scroll reveal.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::document::WORK_ITEMS;
use crate::model::{App, SectionId};
use crate::view::theme::{colors, Styles};

use super::pad_to;

pub fn lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();

    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled("  Selected Work", Styles::title())),
        Line::from(Span::styled(
            "  ─────────────",
            Style::default().fg(c.border),
        )),
        Line::from(""),
    ];

    for (index, item) in WORK_ITEMS.iter().enumerate() {
        let revealed = app.scroll.work_item_revealed(index);
        if revealed {
            out.push(Line::from(Span::styled(
                format!("  {}", item.title),
                Style::default()
                    .fg(c.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            out.push(Line::from(Span::styled(
                format!("    {}", item.blurb),
                Style::default().fg(c.fg),
            )));
            out.push(Line::from(Span::styled(
                format!("    {}", item.stack),
                Style::default().fg(c.muted),
            )));
        } else {
            out.push(Line::from(Span::styled(
                format!("  {}", item.title),
                Styles::unrevealed(),
            )));
            out.push(Line::from(Span::styled(
                format!("    {}", item.blurb),
                Styles::unrevealed(),
            )));
            out.push(Line::from(Span::styled(
                format!("    {}", item.stack),
                Styles::unrevealed(),
            )));
        }
        out.push(Line::from(""));
    }

    pad_to(out, SectionId::Work.height())
}
