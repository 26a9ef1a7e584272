use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::timeout;
use tracing::Instrument;
use uuid::Uuid;

use crate::backend::{ContactBackend, ContactReply};
use crate::form::{validate, ContactRequest, FieldStore};
use crate::notify::NotificationSink;
use crate::submission::outcome::{SubmissionOutcome, DEFAULT_SUCCESS_MESSAGE};
use crate::submission::state::{SubmissionIntent, SubmissionState};

/// Default bound on a single backend call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

enum Admission {
    Busy,
    Invalid(SubmissionOutcome),
    Started,
}

/// Drives one contact submission at a time from validation to notification.
///
/// At most one request is ever in flight: a `submit` issued while another
/// is pending is dropped without contacting the backend or the sink.
pub struct SubmissionController<B, N> {
    backend: B,
    sink: N,
    fields: FieldStore,
    state: Mutex<SubmissionState>,
    request_timeout: Duration,
}

impl<B, N> SubmissionController<B, N>
where
    B: ContactBackend,
    N: NotificationSink,
{
    pub fn new(backend: B, sink: N, fields: FieldStore) -> Self {
        Self {
            backend,
            sink,
            fields,
            state: Mutex::new(SubmissionState::Idle),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Submit whatever the field store currently holds.
    pub async fn submit_current(&self) -> Option<SubmissionOutcome> {
        let request = self.fields.snapshot();
        self.submit(request).await
    }

    /// Validate and send `request`, then report the outcome.
    ///
    /// Returns `None` when another submission is still pending; nothing is
    /// sent or notified in that case. Otherwise exactly one notification is
    /// emitted and the outcome is returned.
    pub async fn submit(&self, request: ContactRequest) -> Option<SubmissionOutcome> {
        match self.admit(&request) {
            Admission::Busy => {
                tracing::debug!("Submission already in flight, ignoring submit");
                return None;
            }
            Admission::Invalid(outcome) => {
                tracing::info!(outcome = outcome.kind(), "Contact request rejected locally");
                self.sink.notify(&outcome);
                return Some(outcome);
            }
            Admission::Started => {}
        }

        // Runs on every exit path, including a dropped future or a panicking backend.
        let settle = scopeguard::guard((), |_| {
            let mut state = self.state.lock();
            *state = state.reduce(SubmissionIntent::Settle);
        });

        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!("contact_submission", attempt_id = %attempt_id);
        let outcome = self.exchange(&request).instrument(span).await;

        drop(settle);

        if outcome.is_success() {
            self.fields.reset();
        }
        tracing::info!(
            attempt_id = %attempt_id,
            outcome = outcome.kind(),
            "Contact submission settled"
        );
        self.sink.notify(&outcome);
        Some(outcome)
    }

    /// Check the guard and validity, claiming the slot on success.
    fn admit(&self, request: &ContactRequest) -> Admission {
        let mut state = self.state.lock();
        if state.is_submitting() {
            return Admission::Busy;
        }
        if let Err(reason) = validate(request) {
            return Admission::Invalid(SubmissionOutcome::ValidationFailure { reason });
        }
        *state = state.reduce(SubmissionIntent::Begin);
        Admission::Started
    }

    async fn exchange(&self, request: &ContactRequest) -> SubmissionOutcome {
        tracing::debug!("Sending contact request");
        match timeout(self.request_timeout, self.backend.send_contact(request)).await {
            Ok(Ok(reply)) => outcome_from_reply(reply),
            Ok(Err(err)) => {
                tracing::warn!(kind = err.kind(), error = %err, "Contact request failed");
                SubmissionOutcome::NetworkFailure
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.request_timeout.as_secs_f64(),
                    "Contact request timed out"
                );
                SubmissionOutcome::NetworkFailure
            }
        }
    }
}

fn outcome_from_reply(reply: ContactReply) -> SubmissionOutcome {
    if reply.accepted {
        SubmissionOutcome::Success {
            message: reply
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        }
    } else {
        SubmissionOutcome::ServerFailure {
            message: reply.message,
        }
    }
}
