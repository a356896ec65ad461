//! Application state aggregate.

use super::{ContactFormState, FocusPanel, MenuState, ScrollState, TabsState, TypedTextState};

/// Application state. Each unit owns a disjoint slice of it; `update` is
/// the only layer that mutates.
pub struct App {
    /// Whether the main loop should exit.
    pub should_quit: bool,

    /// Which panel receives plain keyboard input.
    pub focus: FocusPanel,

    /// Navigation menu overlay.
    pub menu: MenuState,

    /// Document scrolling, navbar threshold, reveal latches.
    pub scroll: ScrollState,

    /// About-section tab switcher.
    pub tabs: TabsState,

    /// Hero typed-text animation.
    pub typed: TypedTextState,

    /// Contact form.
    pub form: ContactFormState,

    /// Transient status bar message.
    pub status_message: Option<String>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Content,
            menu: MenuState::new(),
            scroll: ScrollState::new(),
            tabs: TabsState::new(),
            typed: TypedTextState::new(),
            form: ContactFormState::new(),
            status_message: None,
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clears the status bar message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
