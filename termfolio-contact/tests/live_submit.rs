//! Live FormSubmit integration test.
//!
//! Run with:
//! ```bash
//! CONTACT_TEST_RECIPIENT=you@example.com \
//!     cargo test -p termfolio-contact --test live_submit -- --ignored --nocapture
//! ```

use termfolio_contact::{ContactClient, ContactError, ContactRequest};

#[tokio::test]
#[ignore = "integration test: posts to the live FormSubmit endpoint, requires CONTACT_TEST_RECIPIENT"]
async fn live_submit_round_trip() {
    let Ok(recipient) = std::env::var("CONTACT_TEST_RECIPIENT") else {
        println!("skipped: CONTACT_TEST_RECIPIENT not set");
        return;
    };

    let client = ContactClient::new(&recipient).unwrap();
    let request = ContactRequest::new(
        "termfolio integration test",
        "noreply@example.com",
        "Automated delivery check.",
    );

    match client.submit(&request).await {
        Ok(response) => {
            println!("✓ delivered: {:?}", response.message);
        }
        // An unactivated recipient is the common case for a fresh address;
        // the endpoint answered, so the wire path itself works.
        Err(ContactError::Rejected { message }) => {
            println!("✓ endpoint reachable, submission rejected: {message:?}");
        }
        Err(err) => panic!("transport failure: {err}"),
    }
}
