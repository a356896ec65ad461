//! Fallback `mailto:` link composition.
//!
//! When the AJAX path fails the UI offers a manual alternative: a
//! pre-composed mail-client link carrying the same subject and a body
//! quoting the sender's address and message.

use crate::types::subject_for;

/// Builds the fallback link for a failed submission.
///
/// Subject and body are percent-encoded; the body reads
/// `From: <email>` followed by a blank line and the message.
#[must_use]
pub fn mailto_fallback(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let subject = urlencoding::encode(&subject_for(name)).into_owned();
    let body = urlencoding::encode(&format!("From: {email}\n\n{message}")).into_owned();
    format!("mailto:{recipient}?subject={subject}&body={body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_recipient() {
        let href = mailto_fallback("me@example.com", "Ada", "ada@example.com", "hello");
        assert!(href.starts_with("mailto:me@example.com?subject="));
    }

    #[test]
    fn subject_is_encoded() {
        let href = mailto_fallback("me@example.com", "Ada Lovelace", "a@b.c", "hi");
        assert!(href.contains("subject=Portfolio%20Contact%20from%20Ada%20Lovelace"));
    }

    #[test]
    fn body_carries_sender_and_message() {
        let href = mailto_fallback("me@example.com", "Ada", "ada@example.com", "line one");
        assert!(href.contains("ada%40example.com"));
        assert!(href.contains("line%20one"));
        assert!(href.contains("body=From%3A%20"));
    }

    #[test]
    fn newlines_are_encoded() {
        let href = mailto_fallback("me@example.com", "Ada", "a@b.c", "first\nsecond");
        assert!(href.contains("first%0Asecond"));
        // The From header separator is two encoded newlines.
        assert!(href.contains("%0A%0A"));
    }
}
