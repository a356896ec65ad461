//! Menu overlay updates.

use crate::message::NavigationMessage;
use crate::model::App;

/// Handles menu overlay messages.
pub fn update(app: &mut App, msg: &NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.menu.select_previous(),
        NavigationMessage::SelectNext => app.menu.select_next(),
        NavigationMessage::SelectFirst => app.menu.select_first(),
        NavigationMessage::SelectLast => app.menu.select_last(),
        NavigationMessage::Confirm => {
            // Activating a link closes the menu (restoring scrolling) and
            // jumps to the section, like a nav anchor on the page.
            let target = app.menu.current();
            app.menu.close();
            app.scroll.scroll_to_section(target);
        }
    }
}
