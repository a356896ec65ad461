//! Wire types for the FormSubmit AJAX endpoint.

use serde::{Deserialize, Serialize};

/// Builds the subject line used for both the JSON submission and the
/// mailto fallback.
#[must_use]
pub fn subject_for(name: &str) -> String {
    format!("Portfolio Contact from {name}")
}

/// Outbound submission body.
///
/// Field names prefixed with `_` are FormSubmit control fields, not message
/// content: `_subject` sets the delivered mail subject, `_replyto` the
/// reply-to header, and `_captcha: "false"` disables the endpoint's captcha
/// interstitial.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_replyto")]
    pub replyto: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

impl ContactRequest {
    /// Builds a request from raw form input. Fields are trimmed; absent
    /// input should be passed as the empty string. No further validation
    /// is performed; empty fields are submitted as-is.
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        let name = name.trim().to_string();
        let email = email.trim().to_string();
        Self {
            subject: subject_for(&name),
            replyto: email.clone(),
            name,
            email,
            message: message.trim().to_string(),
            captcha: "false".to_string(),
        }
    }
}

/// Response body returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    /// Confirmation flag. Absent counts as failure.
    #[serde(default)]
    pub success: SuccessFlag,
    /// Human-readable status message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactResponse {
    /// Whether the endpoint confirmed the submission.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.is_true()
    }
}

/// FormSubmit reports `success` either as a JSON boolean or as the string
/// `"true"` / `"false"` depending on the account's activation state.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SuccessFlag {
    Bool(bool),
    Text(String),
}

impl SuccessFlag {
    /// Only boolean `true` and the exact string `"true"` count as success.
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => value == "true",
        }
    }
}

impl Default for SuccessFlag {
    fn default() -> Self {
        Self::Bool(false)
    }
}
