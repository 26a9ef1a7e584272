use crate::form::ValidationError;

/// Used when the backend accepts a message without saying anything.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the message.
    Success { message: String },
    /// The request was rejected locally and never sent.
    ValidationFailure { reason: ValidationError },
    /// No usable answer arrived (unreachable, malformed, timed out, unconfigured).
    NetworkFailure,
    /// The backend answered but declined the message.
    ServerFailure { message: Option<String> },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    /// Short identifier used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success { .. } => "success",
            SubmissionOutcome::ValidationFailure { .. } => "validation_failure",
            SubmissionOutcome::NetworkFailure => "network_failure",
            SubmissionOutcome::ServerFailure { .. } => "server_failure",
        }
    }
}
