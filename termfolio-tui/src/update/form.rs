//! Contact form updates.
//!
//! The submit flow: intercept, honeypot check, trim, Loading, one POST,
//! then either the timed Success or the Idle + mailto fallback path. `prepare_submission` and `apply_outcome` carry the
//! whole state machine so it stays testable without a live service.

use termfolio_contact::{mailto_fallback, ContactRequest};

use crate::backend::ContactService;
use crate::message::{FormMessage, SubmitOutcome};
use crate::model::{App, ContactFormState};

/// Handles contact form messages.
pub fn update(app: &mut App, msg: FormMessage, contact: &ContactService) {
    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_prev(),
        FormMessage::Input(ch) => app.form.push_char(ch),
        FormMessage::Backspace => app.form.backspace(),
        FormMessage::Submit => {
            if let Some(request) = prepare_submission(&mut app.form) {
                app.set_status("Sending...");
                contact.submit(request);
            }
        }
        FormMessage::Completed(outcome) => {
            app.clear_status();
            apply_outcome(&mut app.form, contact.recipient(), &outcome);
        }
    }
}

/// Intercepts a submit attempt. Returns the request to send, or `None`
/// when nothing must happen: the submit control is disabled (a request is
/// already in flight) or the honeypot was filled. The spam case aborts
/// silently, with no state change and no network call.
pub(crate) fn prepare_submission(form: &mut ContactFormState) -> Option<ContactRequest> {
    if form.submit_disabled() {
        return None;
    }
    if !form.honeypot.is_empty() {
        return None;
    }

    let request = ContactRequest::new(&form.name, &form.email, &form.message);
    form.set_loading(request.clone());
    Some(request)
}

/// Applies a finished submission. Failures of every kind (transport,
/// parse, explicit rejection) take the same path: generic message plus
/// the mailto fallback built from what was actually submitted.
pub(crate) fn apply_outcome(
    form: &mut ContactFormState,
    recipient: &str,
    outcome: &SubmitOutcome,
) {
    match outcome {
        Ok(_) => form.set_success(),
        Err(_) => {
            let (name, email, message) = form
                .in_flight
                .as_ref()
                .map(|req| (req.name.clone(), req.email.clone(), req.message.clone()))
                .unwrap_or_default();
            let href = mailto_fallback(recipient, &name, &email, &message);
            form.set_failure(href);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedbackKind, FormStatus, FAILURE_TEXT, SUCCESS_TEXT};
    use termfolio_contact::{ContactError, ContactResponse, SuccessFlag};

    const RECIPIENT: &str = "me@example.com";

    fn filled_form() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "let's build something".to_string();
        form
    }

    fn success_response() -> SubmitOutcome {
        Ok(ContactResponse {
            success: SuccessFlag::Text("true".to_string()),
            message: None,
        })
    }

    // ---- prepare_submission ----

    #[test]
    fn filled_honeypot_aborts_silently() {
        let mut form = filled_form();
        form.honeypot = "https://spam.example".to_string();

        assert!(prepare_submission(&mut form).is_none());
        // No state change of any kind.
        assert_eq!(form.status, FormStatus::Idle);
        assert!(form.feedback.is_none());
        assert!(form.in_flight.is_none());
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn submit_is_ignored_while_loading() {
        let mut form = filled_form();
        assert!(prepare_submission(&mut form).is_some());
        assert_eq!(form.status, FormStatus::Loading);
        assert!(prepare_submission(&mut form).is_none());
    }

    #[test]
    fn submission_trims_and_captures_fields() {
        let mut form = filled_form();
        form.name = "  Ada  ".to_string();
        let request = prepare_submission(&mut form).unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.subject, "Portfolio Contact from Ada");
        assert_eq!(
            form.in_flight.as_ref().map(|r| r.name.as_str()),
            Some("Ada")
        );
    }

    #[test]
    fn empty_fields_still_submit() {
        let mut form = ContactFormState::new();
        let request = prepare_submission(&mut form).unwrap();
        assert_eq!(request.name, "");
        assert_eq!(form.status, FormStatus::Loading);
    }

    // ---- apply_outcome ----

    #[test]
    fn confirmed_send_enters_success_and_clears_fields() {
        let mut form = filled_form();
        prepare_submission(&mut form).unwrap();
        apply_outcome(&mut form, RECIPIENT, &success_response());

        assert_eq!(form.status, FormStatus::Success);
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
        assert_eq!(
            form.feedback,
            Some((FeedbackKind::Success, SUCCESS_TEXT.to_string()))
        );
        assert!(form.fallback_href.is_none());
    }

    #[test]
    fn rejection_shows_generic_failure_and_fallback() {
        let mut form = filled_form();
        prepare_submission(&mut form).unwrap();
        apply_outcome(
            &mut form,
            RECIPIENT,
            &Err(ContactError::Rejected {
                message: Some("bad".to_string()),
            }),
        );

        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(
            form.feedback,
            Some((FeedbackKind::Error, FAILURE_TEXT.to_string()))
        );
        let href = form.fallback_href.expect("fallback link");
        assert!(href.starts_with("mailto:me@example.com?"));
        assert!(href.contains("ada%40example.com"));
        assert!(href.contains("let%27s%20build%20something"));
    }

    #[test]
    fn transport_failure_takes_the_same_path() {
        let mut form = filled_form();
        prepare_submission(&mut form).unwrap();
        apply_outcome(
            &mut form,
            RECIPIENT,
            &Err(ContactError::NetworkError {
                detail: "offline".to_string(),
            }),
        );

        assert_eq!(form.status, FormStatus::Idle);
        assert!(form.fallback_href.is_some());
    }

    #[test]
    fn fallback_uses_submitted_values_not_live_buffers() {
        let mut form = filled_form();
        prepare_submission(&mut form).unwrap();
        // User edits the email while the request is in flight.
        form.email = "edited@example.com".to_string();
        apply_outcome(
            &mut form,
            RECIPIENT,
            &Err(ContactError::Timeout {
                detail: "slow".to_string(),
            }),
        );
        let href = form.fallback_href.expect("fallback link");
        assert!(href.contains("ada%40example.com"));
        assert!(!href.contains("edited%40example.com"));
    }
}
