//! Surfacing submission outcomes to the user.

use std::sync::Arc;

mod console;
mod notice;
mod recording;

pub use console::ConsoleSink;
pub use notice::{Notice, NoticeVariant, NETWORK_FAILURE_TEXT, SERVER_FAILURE_FALLBACK};
pub use recording::RecordingSink;

use crate::submission::SubmissionOutcome;

/// Receives the terminal outcome of every submission attempt.
///
/// Fire-and-forget: the controller never inspects what the sink does.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, outcome: &SubmissionOutcome);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn notify(&self, outcome: &SubmissionOutcome) {
        (**self).notify(outcome);
    }
}
