//! Hero section: name, animated role line, tagline.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::document::{HERO_TAGLINE, OWNER_NAME};
use crate::model::{App, SectionId};
use crate::view::theme::colors;

use super::pad_to;

pub fn lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();

    let mut out = vec![
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {OWNER_NAME}"),
            Style::default()
                .fg(c.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", "─".repeat(OWNER_NAME.len() + 2)),
            Style::default().fg(c.border),
        )),
        Line::from(""),
    ];

    // Typed role line, with a block cursor while a pass is running.
    let mut role = vec![
        Span::styled("  > ", Style::default().fg(c.muted)),
        Span::styled(
            app.typed.visible().to_string(),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.typed.is_typing() {
        role.push(Span::styled("█", Style::default().fg(c.accent)));
    }
    out.push(Line::from(role));

    out.extend([
        Line::from(""),
        Line::from(Span::styled(
            format!("  {HERO_TAGLINE}"),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "  scroll with ↑/↓ · m opens the menu",
            Style::default().fg(c.border),
        )),
    ]);

    pad_to(out, SectionId::Hero.height())
}
