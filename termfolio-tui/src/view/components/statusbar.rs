//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// Renders the status bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current state.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.menu.open {
        hints.push(("↑↓", "Select"));
        hints.push(("Enter", "Go"));
        hints.push(("m/Esc", "Close"));
        return hints;
    }

    if app.focus.is_form() {
        hints.push(("Tab", "Next Field"));
        hints.push(("Enter", "Send"));
        hints.push(("Esc", "Back"));
    } else {
        hints.push(("↑↓", "Scroll"));
        hints.push(("←→", "Tabs"));
        hints.push(("m", "Menu"));
        hints.push(("Tab", "Form"));
        hints.push(("q", "Quit"));
    }

    hints
}
