//! Menu overlay sub-messages.

/// Messages for the navigation menu overlay.
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Highlight the previous link.
    SelectPrevious,
    /// Highlight the next link.
    SelectNext,
    /// Jump to the first link.
    SelectFirst,
    /// Jump to the last link.
    SelectLast,
    /// Activate the highlighted link: jump to its section and close.
    Confirm,
}
