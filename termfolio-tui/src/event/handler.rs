//! Event handlers.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, NavigationMessage};
use crate::model::{App, FormField};

/// Polls for a terminal event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop iteration anyway.
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only: Release/Repeat would double keystrokes on Windows.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // The menu overlay owns the keyboard while open.
    if app.menu.open {
        return handle_menu_keys(&key);
    }

    if app.focus.is_form() {
        handle_form_keys(&key, app)
    } else {
        handle_content_keys(&key)
    }
}

/// Keys while the navigation menu overlay is open.
fn handle_menu_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::MENU.matches(key) {
        return AppMessage::ToggleMenu;
    }
    if DefaultKeymap::BACK.matches(key) {
        return AppMessage::Back;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// Keys while the scrolling document has focus.
fn handle_content_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(key) || DefaultKeymap::ALT_QUIT.matches(key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::MENU.matches(key) {
        return AppMessage::ToggleMenu;
    }
    if DefaultKeymap::FOCUS_TOGGLE.matches(key) {
        return AppMessage::ToggleFocus;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::JumpTop),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Content(ContentMessage::JumpBottom),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevTab),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextTab),
        _ => AppMessage::Noop,
    }
}

/// Keys while the contact form has focus. Plain characters belong to the
/// focused field, so only modified shortcuts stay global here.
fn handle_form_keys(key: &KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ALT_QUIT.matches(key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::BACK.matches(key) {
        return AppMessage::Back;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        KeyCode::Enter => match app.form.focus {
            FormField::Submit => AppMessage::Form(FormMessage::Submit),
            // The message field behaves like a textarea.
            FormField::Message => AppMessage::Form(FormMessage::Input('\n')),
            _ => AppMessage::Form(FormMessage::NextField),
        },

        // Shift included: uppercase and symbols arrive with it set.
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = App::new();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(
            handle_event(key.clone(), &app),
            AppMessage::Quit
        ));
        app.menu.toggle();
        assert!(matches!(handle_event(key, &app), AppMessage::Quit));
    }

    #[test]
    fn menu_takes_priority_over_content_keys() {
        let mut app = App::new();
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::ScrollDown)
        ));
        app.menu.toggle();
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }

    #[test]
    fn plain_characters_type_into_the_form() {
        let mut app = App::new();
        app.focus = FocusPanel::Form;
        assert!(matches!(
            handle_event(press(KeyCode::Char('m')), &app),
            AppMessage::Form(FormMessage::Input('m'))
        ));
        let shifted = Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert!(matches!(
            handle_event(shifted, &app),
            AppMessage::Form(FormMessage::Input('A'))
        ));
    }

    #[test]
    fn enter_submits_only_on_the_submit_control() {
        let mut app = App::new();
        app.focus = FocusPanel::Form;
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::NextField)
        ));
        app.form.focus = FormField::Message;
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Input('\n'))
        ));
        app.form.focus = FormField::Submit;
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(Event::Key(key), &app),
            AppMessage::Noop
        ));
    }
}
