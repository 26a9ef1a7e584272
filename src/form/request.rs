use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the four contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four-field payload sent to `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub(crate) fn field_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }
}
