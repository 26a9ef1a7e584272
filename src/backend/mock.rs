use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::backend::error::BackendError;
use crate::backend::wire::ContactReply;
use crate::backend::ContactBackend;
use crate::form::ContactRequest;

pub const MOCK_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// In-process stand-in for the contact endpoint.
///
/// Waits for a fixed delay, then accepts every request. Used by
/// `send --dry-run` and handy for exercising the controller offline.
#[derive(Clone)]
pub struct MockBackend {
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl ContactBackend for MockBackend {
    async fn send_contact(&self, request: &ContactRequest) -> Result<ContactReply, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            subject = %request.subject,
            message_chars = request.message.chars().count(),
            "Mock contact submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(ContactReply::accepted(MOCK_SUCCESS_MESSAGE))
    }
}
