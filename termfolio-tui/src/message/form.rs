//! Contact form sub-messages.

use termfolio_contact::{ContactError, ContactResponse};

/// Result of an async submission, delivered back into the main loop.
pub type SubmitOutcome = Result<ContactResponse, ContactError>;

/// Messages for the contact form panel.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Focus the next field (Tab).
    NextField,
    /// Focus the previous field (Shift+Tab).
    PrevField,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Attempt submission (honeypot and Loading guards apply).
    Submit,
    /// The async submission finished.
    Completed(SubmitOutcome),
}
