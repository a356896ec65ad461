//! # termfolio-contact
//!
//! Contact delivery client for the termfolio terminal portfolio.
//!
//! Wraps the [FormSubmit](https://formsubmit.co/) AJAX API: a single JSON
//! POST to `https://formsubmit.co/ajax/<recipient>` with a confirmation
//! response, plus a percent-encoded `mailto:` fallback link for when the
//! network path fails.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* - Use rustls as the TLS backend.
//! - **`native-tls`** - Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use termfolio_contact::{ContactClient, ContactRequest, mailto_fallback};
//!
//! # async fn example() -> termfolio_contact::Result<()> {
//! let client = ContactClient::new("me@example.com")?;
//! let request = ContactRequest::new("Ada", "ada@example.com", "Hello!");
//!
//! match client.submit(&request).await {
//!     Ok(response) => {
//!         println!("delivered: {:?}", response.message);
//!     }
//!     Err(err) => {
//!         // No retries: surface the error and offer the manual path.
//!         eprintln!("delivery failed: {err}");
//!         let href = mailto_fallback("me@example.com", "Ada", "ada@example.com", "Hello!");
//!         println!("email directly instead: {href}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`ContactError`], a serializable enum covering
//! transport failures, parse failures, and endpoint rejections. There is
//! deliberately no retry or backoff logic in this crate: failure handling
//! is exactly one deterministic fallback, owned by the caller.

pub mod client;
pub mod error;
pub mod mailto;
pub mod types;

pub use client::{ContactClient, FORMSUBMIT_AJAX_BASE};
pub use error::{ContactError, Result};
pub use mailto::mailto_fallback;
pub use types::{ContactRequest, ContactResponse, SuccessFlag, subject_for};
