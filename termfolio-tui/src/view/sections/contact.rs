//! Contact section: the form, submit control, feedback, and fallback link.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::model::document::CONTACT_INTRO;
use crate::model::{App, FeedbackKind, FormField, FormStatus, SectionId};
use crate::view::theme::{colors, Styles};

use super::pad_to;

/// Display columns reserved for a field's value.
const FIELD_WIDTH: usize = 46;

pub fn lines(app: &App) -> Vec<Line<'static>> {
    let c = colors();
    let form_focused = app.focus.is_form();

    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled("  Contact", Styles::title())),
        Line::from(Span::styled(
            "  ───────",
            Style::default().fg(c.border),
        )),
        Line::from(Span::styled(
            format!("  {CONTACT_INTRO}"),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
    ];

    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let value = match field {
            FormField::Name => &app.form.name,
            FormField::Email => &app.form.email,
            _ => &app.form.message,
        };
        let focused = form_focused && app.form.focus == field;
        out.extend(field_lines(field.label(), value, focused));
    }
    out.push(Line::from(""));

    out.push(submit_line(app, form_focused));

    if let Some((kind, text)) = &app.form.feedback {
        let style = match kind {
            FeedbackKind::Success => Style::default().fg(c.success),
            FeedbackKind::Error => Style::default().fg(c.error),
        };
        out.push(Line::from(Span::styled(format!("  {text}"), style)));
    }

    if let Some(href) = &app.form.fallback_href {
        out.push(Line::from(Span::styled(
            "  Email me directly instead:",
            Style::default().fg(c.muted),
        )));
        out.push(Line::from(Span::styled(
            format!("  {href}"),
            Style::default()
                .fg(c.accent)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    if !form_focused {
        out.push(Line::from(""));
        out.push(Line::from(Span::styled(
            "  press Tab to fill in the form",
            Style::default().fg(c.border),
        )));
    }

    pad_to(out, SectionId::Contact.height())
}

/// Label row plus value row for one editable field.
fn field_lines(label: &'static str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let c = colors();
    let label_style = if focused {
        Style::default()
            .fg(c.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let mut value_spans = vec![Span::styled(
        format!("    {}", clip_value(value)),
        Style::default().fg(c.fg),
    )];
    if focused {
        value_spans.push(Span::styled("█", Style::default().fg(c.accent)));
    }

    vec![
        Line::from(Span::styled(format!("  {label}"), label_style)),
        Line::from(value_spans),
    ]
}

/// The submit control with its three mutually exclusive captions.
fn submit_line(app: &App, form_focused: bool) -> Line<'static> {
    let c = colors();
    let focused = form_focused && app.form.focus == FormField::Submit;

    let (caption, mut style) = match app.form.status {
        FormStatus::Idle => ("[ Send Message ]", Style::default().fg(c.fg)),
        FormStatus::Loading => ("[ Sending... ]", Style::default().fg(c.muted)),
        FormStatus::Success => ("[ Sent ✓ ]", Style::default().fg(c.success)),
    };
    if focused && !app.form.submit_disabled() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Line::from(Span::styled(format!("  {caption}"), style))
}

/// Shows the tail of a value that fits the field width, so the cursor end
/// stays visible while typing. Newlines render as a return mark.
fn clip_value(value: &str) -> String {
    let flat: String = value
        .chars()
        .map(|ch| if ch == '\n' { '↵' } else { ch })
        .collect();

    let mut width = 0;
    let mut taken = Vec::new();
    for ch in flat.chars().rev() {
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
        if width > FIELD_WIDTH {
            break;
        }
        taken.push(ch);
    }
    taken.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_values_intact() {
        assert_eq!(clip_value("hello"), "hello");
    }

    #[test]
    fn clip_shows_the_tail_of_long_values() {
        let long = "a".repeat(100);
        let clipped = clip_value(&long);
        assert_eq!(clipped.chars().count(), FIELD_WIDTH);
    }

    #[test]
    fn clip_marks_newlines() {
        assert_eq!(clip_value("a\nb"), "a↵b");
    }

    #[test]
    fn clip_counts_wide_characters() {
        // Full-width characters take two columns each.
        let wide = "漢".repeat(40);
        let clipped = clip_value(&wide);
        assert!(clipped.chars().count() <= FIELD_WIDTH / 2);
    }
}
