//! Submission lifecycle for the contact form.
//!
//! ```text
//! Idle ──submit(valid)──→ Submitting ──settle──→ Idle
//! Idle ──submit(invalid)──→ Idle            (ValidationFailure)
//! Submitting ──submit(*)──→ Submitting       (ignored)
//! ```

mod controller;
mod outcome;
mod state;

pub use controller::{SubmissionController, DEFAULT_REQUEST_TIMEOUT};
pub use outcome::{SubmissionOutcome, DEFAULT_SUCCESS_MESSAGE};
pub use state::{SubmissionIntent, SubmissionState};
