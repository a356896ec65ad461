//! Update layer: state transition logic.
//!
//! Consumes messages and mutates the model; nothing else may.
//! Complex sub-messages are delegated to submodules (navigation, content,
//! form); the contact service is passed through so a submit can hand off
//! its request without the model ever touching I/O.

mod content;
mod form;
mod navigation;

use crate::backend::ContactService;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// Handles an application message.
pub fn update(app: &mut App, msg: AppMessage, contact: &ContactService) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleMenu => {
            app.menu.toggle();
        }

        AppMessage::ToggleFocus => {
            // The menu overlay owns the keyboard while open.
            if !app.menu.open {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Back => {
            if app.menu.open {
                app.menu.close();
                app.clear_status();
            } else if app.focus.is_form() {
                app.focus = FocusPanel::Content;
            }
        }

        AppMessage::Tick => {
            app.typed.tick();
            app.form.tick();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, &nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, &content_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg, contact);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NavigationMessage;
    use crate::model::SectionId;

    fn service() -> ContactService {
        ContactService::new("me@example.com").unwrap()
    }

    #[test]
    fn quit_sets_the_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit, &service());
        assert!(app.should_quit);
    }

    #[test]
    fn menu_toggle_parity_holds_across_sequences() {
        let contact = service();
        let mut app = App::new();
        for toggles in 1..=5 {
            update(&mut app, AppMessage::ToggleMenu, &contact);
            assert_eq!(app.menu.open, toggles % 2 == 1);
        }
    }

    #[test]
    fn link_activation_closes_menu_and_jumps() {
        let contact = service();
        let mut app = App::new();
        app.scroll.set_viewport(24);
        update(&mut app, AppMessage::ToggleMenu, &contact);
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectLast),
            &contact,
        );
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Confirm),
            &contact,
        );
        assert!(!app.menu.open);
        assert_eq!(app.scroll.offset, SectionId::Contact.start().min(app.scroll.max_offset()));
    }

    #[test]
    fn focus_does_not_toggle_while_menu_is_open() {
        let contact = service();
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleMenu, &contact);
        update(&mut app, AppMessage::ToggleFocus, &contact);
        assert!(app.focus.is_content());
        update(&mut app, AppMessage::Back, &contact);
        update(&mut app, AppMessage::ToggleFocus, &contact);
        assert!(app.focus.is_form());
    }

    #[test]
    fn back_leaves_the_form_after_closing_the_menu() {
        let contact = service();
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleFocus, &contact);
        update(&mut app, AppMessage::ToggleMenu, &contact);
        // First Back closes the menu, second leaves the form.
        update(&mut app, AppMessage::Back, &contact);
        assert!(app.focus.is_form());
        update(&mut app, AppMessage::Back, &contact);
        assert!(app.focus.is_content());
    }
}
