//! Top-level application messages.

use super::{ContentMessage, FormMessage, NavigationMessage};

/// Main message enum. Every user action and timer step flows through here.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application.
    Quit,
    /// Open/close the navigation menu overlay.
    ToggleMenu,
    /// Switch keyboard focus between content and the contact form.
    ToggleFocus,
    /// Esc: close the menu if open, otherwise leave the form.
    Back,
    /// Fixed 100 ms animation tick.
    Tick,
    /// Menu overlay sub-message.
    Navigation(NavigationMessage),
    /// Document sub-message (scrolling, tabs).
    Content(ContentMessage),
    /// Contact form sub-message.
    Form(FormMessage),
    /// No operation, stands in for `Option::None`.
    Noop,
}
