use serde::{Deserialize, Serialize};

/// Unified error type for contact delivery operations.
///
/// All variants are serializable for structured error reporting. Unlike a
/// provider-style API client there is no retry machinery behind these: a
/// failed delivery is surfaced once and the caller falls back to a
/// pre-composed `mailto:` link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ContactError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS failure, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint's response body could not be parsed as JSON.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize the request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The endpoint answered but did not confirm the submission.
    ///
    /// Covers both an explicit `success: false` flag and any response whose
    /// success flag is missing or unrecognized.
    Rejected {
        /// Message reported by the endpoint, if any.
        message: Option<String>,
    },
}

impl ContactError {
    /// Whether the failure is expected behavior (the endpoint answered and
    /// declined) rather than a transport fault, used for log leveling.
    ///
    /// Returns `true` for `warn`-level failures, `false` for `error`-level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Rejected { message } => {
                if let Some(msg) = message {
                    write!(f, "Submission rejected: {msg}")
                } else {
                    write!(f, "Submission rejected")
                }
            }
        }
    }
}

impl std::error::Error for ContactError {}

/// Convenience type alias for `Result<T, ContactError>`.
pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ContactError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ContactError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_parse_error() {
        let e = ContactError::ParseError {
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "Parse error: bad json");
    }

    #[test]
    fn display_rejected_with_message() {
        let e = ContactError::Rejected {
            message: Some("activation pending".to_string()),
        };
        assert_eq!(e.to_string(), "Submission rejected: activation pending");
    }

    #[test]
    fn display_rejected_without_message() {
        let e = ContactError::Rejected { message: None };
        assert_eq!(e.to_string(), "Submission rejected");
    }

    #[test]
    fn expected_only_for_rejections() {
        assert!(
            ContactError::Rejected { message: None }.is_expected()
        );
        assert!(
            !ContactError::NetworkError {
                detail: "x".into()
            }
            .is_expected()
        );
        assert!(
            !ContactError::Timeout {
                detail: "x".into()
            }
            .is_expected()
        );
        assert!(
            !ContactError::ParseError {
                detail: "x".into()
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = ContactError::Rejected {
            message: Some("nope".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Rejected\""));
        let back: ContactError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ContactError> = vec![
            ContactError::NetworkError {
                detail: "d".into(),
            },
            ContactError::Timeout {
                detail: "d".into(),
            },
            ContactError::ParseError {
                detail: "d".into(),
            },
            ContactError::SerializationError {
                detail: "d".into(),
            },
            ContactError::Rejected { message: None },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ContactError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
