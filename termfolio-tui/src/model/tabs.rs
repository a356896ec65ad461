//! Tab switcher state for the About section.
//!
//! Exclusive selection among a fixed set of named panels. A link whose
//! panel identifier matches nothing still becomes active; the mismatch
//! is silent and simply shows no panel.

use super::document::TAB_PANELS;

/// A tab link carrying the identifier of the panel it controls.
#[derive(Debug, Clone, Copy)]
pub struct TabLink {
    pub label: &'static str,
    pub panel: &'static str,
}

/// Tab switcher state.
#[derive(Debug)]
pub struct TabsState {
    pub links: Vec<TabLink>,
    /// Index of the active link; exactly one link is always active.
    pub active_link: usize,
    /// Identifier of the shown panel, if the active link matched one.
    pub active_panel: Option<&'static str>,
}

impl TabsState {
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            links: vec![
                TabLink {
                    label: "Skills",
                    panel: "skills",
                },
                TabLink {
                    label: "Experience",
                    panel: "experience",
                },
                TabLink {
                    label: "Education",
                    panel: "education",
                },
            ],
            active_link: 0,
            active_panel: None,
        };
        state.activate(0);
        state
    }

    /// Activates the link at `index`: all other links and panels are
    /// deselected first, then the matching panel (if any) is shown.
    pub fn activate(&mut self, index: usize) {
        if index >= self.links.len() {
            return;
        }
        self.active_link = index;
        let wanted = self.links[index].panel;
        self.active_panel = TAB_PANELS
            .iter()
            .find(|panel| panel.id == wanted)
            .map(|panel| panel.id);
    }

    /// Activates the next link, wrapping.
    pub fn next(&mut self) {
        self.activate((self.active_link + 1) % self.links.len());
    }

    /// Activates the previous link, wrapping.
    pub fn prev(&mut self) {
        self.activate((self.active_link + self.links.len() - 1) % self.links.len());
    }
}

impl Default for TabsState {
    fn default() -> Self {
        Self::new()
    }
}
