//! Contact form data: the input store, the request payload and validation.

mod fields;
mod request;
mod validator;

pub use fields::FieldStore;
pub use request::{ContactRequest, FieldName};
pub use validator::{is_valid_email, max_len, validate, ValidationError};
