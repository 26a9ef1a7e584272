use crate::form::ValidationError;
use crate::submission::SubmissionOutcome;

pub const NETWORK_FAILURE_TEXT: &str = "Failed to send message. Please try again.";
pub const SERVER_FAILURE_FALLBACK: &str =
    "The server could not process your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// User-facing rendering of a submission outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

impl From<&SubmissionOutcome> for Notice {
    fn from(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success { message } => Notice {
                title: "Success!".to_string(),
                description: message.clone(),
                variant: NoticeVariant::Default,
            },
            SubmissionOutcome::ValidationFailure { reason } => {
                Notice::error(validation_text(reason))
            }
            SubmissionOutcome::NetworkFailure => Notice::error(NETWORK_FAILURE_TEXT),
            SubmissionOutcome::ServerFailure { message } => Notice::error(
                message
                    .clone()
                    .unwrap_or_else(|| SERVER_FAILURE_FALLBACK.to_string()),
            ),
        }
    }
}

fn validation_text(reason: &ValidationError) -> String {
    match reason {
        ValidationError::MissingField(field) => {
            format!("Please fill in all fields (missing: {})", field.label())
        }
        ValidationError::InvalidEmail => "Please enter a valid email address".to_string(),
        ValidationError::TooLong { field, max } => {
            format!("{} must be at most {} characters", field.label(), max)
        }
    }
}
