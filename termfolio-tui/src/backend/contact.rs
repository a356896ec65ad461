//! Contact submission service.
//!
//! Bridges the sync main loop to the async contact client: submissions
//! are spawned onto a private tokio runtime and their outcomes flow back
//! through an unbounded channel the loop drains each iteration. The UI
//! stays responsive during the request; no cancellation is offered, a
//! submission runs to completion or transport failure.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use termfolio_contact::{ContactClient, ContactRequest};

use crate::message::SubmitOutcome;

/// Owns the runtime, the HTTP client, and the outcome channel.
pub struct ContactService {
    runtime: tokio::runtime::Runtime,
    client: Arc<ContactClient>,
    recipient: String,
    tx: mpsc::UnboundedSender<SubmitOutcome>,
    rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl ContactService {
    /// Creates the service delivering to `recipient`.
    pub fn new(recipient: impl Into<String>) -> Result<Self> {
        let recipient = recipient.into();
        let client = Arc::new(ContactClient::new(&recipient)?);
        // One worker is plenty: at most one submission is in flight, held
        // there only because the submit control is disabled while Loading.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            client,
            recipient,
            tx,
            rx,
        })
    }

    /// Destination address, also the mailto fallback target.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Fires the POST in the background; the outcome arrives via
    /// [`ContactService::try_recv`].
    pub fn submit(&self, request: ContactRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = client.submit(&request).await;
            if let Err(ref err) = outcome {
                if err.is_expected() {
                    log::warn!("contact submission rejected: {err}");
                } else {
                    log::error!("contact submission failed: {err}");
                }
            }
            // The receiver only disappears on shutdown; nothing to do then.
            let _ = tx.send(outcome);
        });
    }

    /// Non-blocking poll for a finished submission.
    pub fn try_recv(&mut self) -> Option<SubmitOutcome> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_starts_with_an_empty_outcome_queue() {
        let mut service = ContactService::new("me@example.com").unwrap();
        assert_eq!(service.recipient(), "me@example.com");
        assert!(service.try_recv().is_none());
    }

    #[test]
    fn outcomes_flow_through_the_channel() {
        let mut service = ContactService::new("me@example.com").unwrap();
        // Push an outcome through the same channel the spawned task uses.
        service
            .tx
            .send(Err(termfolio_contact::ContactError::Rejected {
                message: None,
            }))
            .unwrap();
        let outcome = service.try_recv().expect("queued outcome");
        assert!(outcome.is_err());
        assert!(service.try_recv().is_none());
    }
}
