//! About section: introduction and the Skills/Experience/Education tabs.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::document::{ABOUT_INTRO, TAB_PANELS};
use crate::model::{App, SectionId};
use crate::view::theme::{colors, Styles};

use super::pad_to;

pub fn lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();
    let revealed = app.scroll.section_revealed(SectionId::About);
    let body_style = if revealed {
        Style::default().fg(c.fg)
    } else {
        Styles::unrevealed()
    };

    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled("  About", Styles::title())),
        Line::from(Span::styled(
            "  ─────",
            Style::default().fg(c.border),
        )),
        Line::from(""),
    ];

    for text in ABOUT_INTRO {
        out.push(Line::from(Span::styled(format!("  {text}"), body_style)));
    }
    out.push(Line::from(""));

    // Tab bar: exactly one link is active.
    let mut bar = vec![Span::raw("  ")];
    for (index, link) in app.tabs.links.iter().enumerate() {
        if index > 0 {
            bar.push(Span::styled("  ·  ", Style::default().fg(c.border)));
        }
        let style = if index == app.tabs.active_link {
            Style::default()
                .fg(c.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.muted)
        };
        bar.push(Span::styled(link.label.to_string(), style));
    }
    out.push(Line::from(bar));
    out.push(Line::from(""));

    // Panel of the active link, if its identifier matched one.
    if let Some(panel_id) = app.tabs.active_panel {
        if let Some(panel) = TAB_PANELS.iter().find(|panel| panel.id == panel_id) {
            for &(heading, detail) in panel.entries {
                out.push(Line::from(vec![
                    Span::styled(
                        format!("  {heading:<14}"),
                        Style::default().fg(c.accent),
                    ),
                    Span::styled(detail.to_string(), body_style),
                ]));
                out.push(Line::from(""));
            }
        }
    }

    pad_to(out, SectionId::About.height())
}
