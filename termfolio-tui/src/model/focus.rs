//! Focus state definitions.

/// Focus target for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Scrolling document (sections, tabs).
    #[default]
    Content,
    /// Contact form fields.
    Form,
}

impl FocusPanel {
    /// Switch to the other panel.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Content => FocusPanel::Form,
            FocusPanel::Form => FocusPanel::Content,
        }
    }

    #[must_use]
    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }

    #[must_use]
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }
}
