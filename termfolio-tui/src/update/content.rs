//! Document panel updates: scrolling and tabs.

use crate::message::ContentMessage;
use crate::model::{App, PAGE_SCROLL_STEP};

/// Handles document messages.
pub fn update(app: &mut App, msg: &ContentMessage) {
    // Scroll lock while the menu overlay is open.
    if app.menu.scroll_locked() && is_scroll(msg) {
        return;
    }

    match msg {
        ContentMessage::ScrollUp => app.scroll.scroll_by(-1),
        ContentMessage::ScrollDown => app.scroll.scroll_by(1),
        ContentMessage::PageUp => app.scroll.scroll_by(-i32::from(PAGE_SCROLL_STEP)),
        ContentMessage::PageDown => app.scroll.scroll_by(i32::from(PAGE_SCROLL_STEP)),
        ContentMessage::JumpTop => app.scroll.scroll_to(0),
        ContentMessage::JumpBottom => {
            let bottom = app.scroll.max_offset();
            app.scroll.scroll_to(bottom);
        }
        ContentMessage::NextTab => app.tabs.next(),
        ContentMessage::PrevTab => app.tabs.prev(),
    }
}

fn is_scroll(msg: &ContentMessage) -> bool {
    !matches!(msg, ContentMessage::NextTab | ContentMessage::PrevTab)
}
