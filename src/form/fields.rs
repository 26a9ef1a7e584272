//! Shared holder for the current form input values.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::form::request::{ContactRequest, FieldName};

/// Mutable record of the four form inputs.
///
/// Clones share the same underlying values, so the input layer and the
/// submission controller can each hold a handle.
#[derive(Clone, Default)]
pub struct FieldStore {
    inner: Arc<Mutex<ContactRequest>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of a single field.
    pub fn set(&self, field: FieldName, value: impl Into<String>) {
        *self.inner.lock().field_mut(field) = value.into();
    }

    pub fn get(&self, field: FieldName) -> String {
        self.inner.lock().field(field).to_string()
    }

    /// Copy of the current values, used as the request for one attempt.
    pub fn snapshot(&self) -> ContactRequest {
        self.inner.lock().clone()
    }

    /// Clear all four fields.
    pub fn reset(&self) {
        *self.inner.lock() = ContactRequest::default();
    }

    pub fn is_empty(&self) -> bool {
        let values = self.inner.lock();
        FieldName::ALL.iter().all(|f| values.field(*f).is_empty())
    }
}

impl std::fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldStore").field(&*self.inner.lock()).finish()
    }
}
