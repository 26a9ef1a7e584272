//! Client-side checks run before anything reaches the network.
//!
//! Rules are evaluated in order and the first failure wins:
//! 1. every field is non-blank after trimming,
//! 2. the email has the shape `local@domain.tld` with no whitespace,
//! 3. no field exceeds the length the backend accepts.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::form::request::{ContactRequest, FieldName};

/// Why a request was rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(FieldName),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: FieldName, max: usize },
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Upper bound on a field's length as sent, matching the backend's limits.
pub fn max_len(field: FieldName) -> Option<usize> {
    match field {
        FieldName::Name => Some(100),
        FieldName::Subject => Some(200),
        FieldName::Message => Some(2000),
        FieldName::Email => None,
    }
}

pub fn validate(request: &ContactRequest) -> Result<(), ValidationError> {
    for field in FieldName::ALL {
        if request.field(field).trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }

    for field in FieldName::ALL {
        if let Some(max) = max_len(field) {
            if request.field(field).chars().count() > max {
                return Err(ValidationError::TooLong { field, max });
            }
        }
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
