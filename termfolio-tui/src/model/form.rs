//! Contact form state.
//!
//! Drives the submit control and the three mutually exclusive submit
//! captions through {Idle, Loading, Success}. Success auto-reverts to
//! Idle after a fixed number of ticks; failure reverts immediately and
//! exposes a pre-built mailto fallback link.

use termfolio_contact::ContactRequest;

/// Ticks the Success state is shown before reverting to Idle (3000 ms).
pub const SUCCESS_REVERT_TICKS: u16 = 30;

pub const SUCCESS_TEXT: &str = "Thanks! Your message has been sent. I'll get back soon.";
pub const FAILURE_TEXT: &str = "Couldn't send via form.";

/// Submission lifecycle. The submit control is disabled only while
/// Loading; a rapid re-submit during Success is allowed, as on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
}

/// Feedback line kind, mapped to success/error styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Editable form fields plus the submit control, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Submit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
            Self::Submit => "Send",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Spam trap: never rendered and never focusable, so interactive use
    /// leaves it empty. A non-empty value aborts submission silently.
    pub honeypot: String,
    /// Currently focused field while the form panel has focus.
    pub focus: FormField,
    pub status: FormStatus,
    /// Feedback line under the submit control.
    pub feedback: Option<(FeedbackKind, String)>,
    /// Mailto link revealed after a failed submission.
    pub fallback_href: Option<String>,
    /// The request captured at submit time, used to compose the fallback
    /// from what was actually sent rather than the live field buffers.
    pub in_flight: Option<ContactRequest>,
    /// Remaining ticks of the Success state; 0 when not counting.
    revert_ticks: u16,
}

impl ContactFormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable buffer for an editable field; `None` for the submit control.
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, ch: char) {
        let focus = self.focus;
        if let Some(buffer) = self.field_mut(focus) {
            buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(buffer) = self.field_mut(focus) {
            buffer.pop();
        }
    }

    /// The submit control is disabled only while a request is in flight.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.status == FormStatus::Loading
    }

    /// Enters Loading: prior feedback and fallback are cleared.
    pub fn set_loading(&mut self, request: ContactRequest) {
        self.status = FormStatus::Loading;
        self.feedback = None;
        self.fallback_href = None;
        self.in_flight = Some(request);
        self.revert_ticks = 0;
    }

    /// Confirmed delivery: show the success caption, clear every field,
    /// and start the timed revert to Idle.
    pub fn set_success(&mut self) {
        self.status = FormStatus::Success;
        self.feedback = Some((FeedbackKind::Success, SUCCESS_TEXT.to_string()));
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.honeypot.clear();
        self.in_flight = None;
        self.revert_ticks = SUCCESS_REVERT_TICKS;
    }

    /// Failed delivery: back to Idle with the generic failure message and
    /// the fallback link revealed. Field buffers are left untouched.
    pub fn set_failure(&mut self, fallback_href: String) {
        self.status = FormStatus::Idle;
        self.feedback = Some((FeedbackKind::Error, FAILURE_TEXT.to_string()));
        self.fallback_href = Some(fallback_href);
        self.in_flight = None;
        self.revert_ticks = 0;
    }

    /// Advances the timed Success → Idle revert.
    pub fn tick(&mut self) {
        if self.status == FormStatus::Success && self.revert_ticks > 0 {
            self.revert_ticks -= 1;
            if self.revert_ticks == 0 {
                self.status = FormStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_wraps_both_ways() {
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Submit);
        assert_eq!(FormField::Email.next(), FormField::Message);
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut form = ContactFormState::new();
        form.push_char('a');
        form.focus = FormField::Email;
        form.push_char('b');
        assert_eq!(form.name, "a");
        assert_eq!(form.email, "b");
        form.backspace();
        assert_eq!(form.email, "");
    }

    #[test]
    fn submit_control_ignores_text_input() {
        let mut form = ContactFormState::new();
        form.focus = FormField::Submit;
        form.push_char('x');
        form.backspace();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn loading_clears_prior_feedback_and_fallback() {
        let mut form = ContactFormState::new();
        form.set_failure("mailto:x".to_string());
        assert!(form.fallback_href.is_some());
        form.set_loading(ContactRequest::new("a", "b", "c"));
        assert_eq!(form.status, FormStatus::Loading);
        assert!(form.feedback.is_none());
        assert!(form.fallback_href.is_none());
        assert!(form.submit_disabled());
    }

    #[test]
    fn success_clears_fields_and_reverts_after_the_delay() {
        let mut form = ContactFormState::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "hi".to_string();
        form.set_loading(ContactRequest::new("Ada", "ada@example.com", "hi"));
        form.set_success();

        assert_eq!(form.status, FormStatus::Success);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert!(!form.submit_disabled());

        for _ in 0..SUCCESS_REVERT_TICKS - 1 {
            form.tick();
        }
        assert_eq!(form.status, FormStatus::Success);
        form.tick();
        assert_eq!(form.status, FormStatus::Idle);
        // The success message itself stays on screen.
        assert!(matches!(form.feedback, Some((FeedbackKind::Success, _))));
    }

    #[test]
    fn failure_keeps_fields_and_reveals_the_fallback() {
        let mut form = ContactFormState::new();
        form.name = "Ada".to_string();
        form.set_loading(ContactRequest::new("Ada", "a@b.c", "hi"));
        form.set_failure("mailto:me@example.com?subject=s".to_string());

        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.name, "Ada");
        assert!(matches!(form.feedback, Some((FeedbackKind::Error, _))));
        assert_eq!(
            form.fallback_href.as_deref(),
            Some("mailto:me@example.com?subject=s")
        );
    }

    #[test]
    fn tick_is_inert_outside_success() {
        let mut form = ContactFormState::new();
        form.tick();
        assert_eq!(form.status, FormStatus::Idle);
        form.set_loading(ContactRequest::new("a", "b", "c"));
        form.tick();
        assert_eq!(form.status, FormStatus::Loading);
    }
}
