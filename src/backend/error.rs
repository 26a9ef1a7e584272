use thiserror::Error;

/// Transport-level failures talking to the portfolio backend.
///
/// Every variant means "no usable answer arrived"; the submission
/// controller maps all of them to a network failure.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// No base URL was configured.
    #[error("Backend base URL is not configured")]
    NotConfigured,

    /// Connection, TLS or protocol failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout.
    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// The backend answered with a body we could not interpret.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Short identifier used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::ClientBuild(_) => "client_build",
            BackendError::NotConfigured => "not_configured",
            BackendError::Transport { .. } => "transport",
            BackendError::Timeout { .. } => "timeout",
            BackendError::MalformedResponse(_) => "malformed_response",
        }
    }
}
