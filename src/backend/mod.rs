//! Backend collaborator for contact submissions and the resume document.
//!
//! [`ContactBackend`] is the seam the submission controller talks to.
//! [`HttpBackend`] implements it against the real REST API; [`MockBackend`]
//! answers locally without a network.

use std::future::Future;
use std::sync::Arc;

use crate::form::ContactRequest;

mod error;
mod http;
mod mock;
mod wire;

pub use error::BackendError;
pub use http::{
    attachment_file_name, Document, HttpBackend, CONTACT_PATH, HEALTH_PATH, RESUME_PATH,
};
pub use mock::{MockBackend, MOCK_SUCCESS_MESSAGE};
pub use wire::{is_truthy, parse_contact_reply, parse_error_detail, ContactReply, HealthStatus};

/// Delivers a contact request and reports the backend's answer.
///
/// `Ok` means a well-formed answer arrived (accepted or declined);
/// `Err` means no usable answer arrived at all.
pub trait ContactBackend: Send + Sync {
    fn send_contact(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<ContactReply, BackendError>> + Send;
}

impl<B: ContactBackend> ContactBackend for Arc<B> {
    fn send_contact(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<ContactReply, BackendError>> + Send {
        (**self).send_contact(request)
    }
}
