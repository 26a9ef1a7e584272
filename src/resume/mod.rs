//! Best-effort retrieval of the resume document.
//!
//! Nothing here is tracked or retried. Failures are logged and reported
//! back as [`LaunchReport::Skipped`], never as errors.

mod opener;

pub use opener::{BrowserOpener, DocumentOpener, DownloadOpener, ResumeError, DEFAULT_RESUME_FILE};

use crate::backend::{HttpBackend, RESUME_PATH};

/// What a single `open_resume` call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchReport {
    /// The document was handed off; `target` is the URL or file path.
    Opened { target: String },
    /// Nothing was opened.
    Skipped { reason: String },
}

impl LaunchReport {
    pub fn is_opened(&self) -> bool {
        matches!(self, LaunchReport::Opened { .. })
    }
}

pub struct ResumeLauncher<O> {
    backend: HttpBackend,
    opener: O,
}

impl<O: DocumentOpener> ResumeLauncher<O> {
    pub fn new(backend: HttpBackend, opener: O) -> Self {
        Self { backend, opener }
    }

    /// Ask the backend for the resume and open it. Safe to repeat.
    pub async fn open_resume(&self) -> LaunchReport {
        let url = match self.backend.endpoint(RESUME_PATH) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Resume unavailable");
                return LaunchReport::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        match self.opener.open(&self.backend, &url).await {
            Ok(target) => {
                tracing::info!(target = %target, "Resume opened");
                LaunchReport::Opened { target }
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to open resume");
                LaunchReport::Skipped {
                    reason: e.to_string(),
                }
            }
        }
    }
}
