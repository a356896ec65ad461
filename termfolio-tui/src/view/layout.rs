//! Main layout rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::sections;

/// Rows outside the document window: navbar and status bar.
pub const CHROME_ROWS: u16 = 2;

/// Renders the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three bands: navbar, document window, status bar.
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    components::navbar::render(app, frame, main_layout[0]);
    render_document(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // The menu overlay draws on top of everything.
    if app.menu.open {
        components::menu::render(app, frame);
    }
}

/// Renders the visible window of the section document.
fn render_document(app: &App, frame: &mut Frame, area: Rect) {
    let mut document: Vec<Line<'static>> = Vec::new();
    document.extend(sections::hero::lines(app));
    document.extend(sections::about::lines(app));
    document.extend(sections::work::lines(app));
    document.extend(sections::contact::lines(app));

    let start = usize::from(app.scroll.offset).min(document.len());
    let end = (start + usize::from(area.height)).min(document.len());
    let window: Vec<Line<'static>> = document[start..end].to_vec();

    frame.render_widget(Paragraph::new(window), area);
}
