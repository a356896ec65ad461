//! HTTP flow for the FormSubmit AJAX endpoint.
//!
//! One POST, one JSON response, no retries. Failure handling is the
//! caller's job (the UI reveals a mailto fallback); this module only maps
//! transport and protocol outcomes onto [`ContactError`].

use std::time::Duration;

use crate::error::{ContactError, Result};
use crate::types::{ContactRequest, ContactResponse};

/// Base URL of the FormSubmit AJAX API. The recipient address is appended
/// as the final path segment.
pub const FORMSUBMIT_AJAX_BASE: &str = "https://formsubmit.co/ajax";

/// Per-request timeout. FormSubmit normally answers well under a second;
/// anything slower than this is treated as a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response length echoed into debug logs.
const LOG_BODY_LIMIT: usize = 512;

/// Client for delivering contact submissions to a fixed recipient.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Creates a client delivering to `recipient`.
    pub fn new(recipient: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContactError::NetworkError {
                detail: format!("failed to construct HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{FORMSUBMIT_AJAX_BASE}/{recipient}"),
        })
    }

    /// Full endpoint URL submissions are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the request and awaits the endpoint's confirmation.
    ///
    /// # Returns
    /// * `Ok(ContactResponse)` - the endpoint confirmed the submission
    /// * `Err(ContactError::Rejected)` - the endpoint answered without
    ///   confirming (explicit failure flag or missing flag)
    /// * `Err(_)` - transport or parse failure
    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ContactError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ContactError::NetworkError {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ContactError::NetworkError {
                detail: format!("failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        let parsed = parse_response(&response_text)?;

        if parsed.is_success() {
            Ok(parsed)
        } else {
            log::warn!(
                "submission rejected by endpoint: {}",
                parsed.message.as_deref().unwrap_or("(no message)")
            );
            Err(ContactError::Rejected {
                message: parsed.message,
            })
        }
    }
}

/// Parses the endpoint's response body. Non-JSON counts as failure.
fn parse_response(response_text: &str) -> Result<ContactResponse> {
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        ContactError::ParseError {
            detail: e.to_string(),
        }
    })
}

/// Truncates a response body for logging, marking the cut.
fn truncate_for_log(text: &str) -> String {
    if text.len() <= LOG_BODY_LIMIT {
        return text.to_string();
    }
    let cut = text
        .char_indices()
        .take_while(|(i, _)| *i <= LOG_BODY_LIMIT)
        .last()
        .map_or(0, |(i, _)| i);
    format!("{}... ({} bytes total)", &text[..cut], text.len())
}
