//! Document sub-messages: scrolling and the About tabs.

/// Messages for the scrolling document panel.
#[derive(Debug, Clone)]
pub enum ContentMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    JumpTop,
    JumpBottom,
    /// Activate the next tab link, wrapping.
    NextTab,
    /// Activate the previous tab link, wrapping.
    PrevTab,
}
