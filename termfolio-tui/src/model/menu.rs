//! Navigation menu overlay state.
//!
//! The terminal analog of the mobile menu: a toggled overlay listing the
//! section links. While it is open, document scrolling is locked; choosing
//! a link (or toggling again) closes it and restores scrolling.

use super::document::SectionId;

/// Menu overlay state.
#[derive(Debug, Default)]
pub struct MenuState {
    /// Whether the overlay is open.
    pub open: bool,
    /// Currently highlighted link index into [`SectionId::ORDER`].
    pub selected: usize,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip open/closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close unconditionally (link activation, Esc).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document scrolling is locked while the menu is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < SectionId::ORDER.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = SectionId::ORDER.len() - 1;
    }

    /// Currently highlighted section link.
    #[must_use]
    pub fn current(&self) -> SectionId {
        SectionId::ORDER[self.selected.min(SectionId::ORDER.len() - 1)]
    }
}
