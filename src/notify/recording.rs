use std::sync::Arc;

use parking_lot::Mutex;

use crate::notify::NotificationSink;
use crate::submission::SubmissionOutcome;

/// Sink that keeps every outcome it receives, in order.
///
/// Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    outcomes: Arc<Mutex<Vec<SubmissionOutcome>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<SubmissionOutcome> {
        self.outcomes.lock().clone()
    }

    pub fn last(&self) -> Option<SubmissionOutcome> {
        self.outcomes.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, outcome: &SubmissionOutcome) {
        self.outcomes.lock().push(outcome.clone());
    }
}
