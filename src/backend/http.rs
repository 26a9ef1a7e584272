use std::time::Duration;

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Client, Response};

use crate::backend::error::BackendError;
use crate::backend::wire::{parse_contact_reply, parse_error_detail, ContactReply, HealthStatus};
use crate::backend::ContactBackend;
use crate::config::BackendConfig;
use crate::form::ContactRequest;

pub const CONTACT_PATH: &str = "/api/contact";
pub const RESUME_PATH: &str = "/api/resume";
pub const HEALTH_PATH: &str = "/api/";

/// A document downloaded from the backend.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name advertised in `Content-Disposition`, if any.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// reqwest-backed client for the portfolio backend API.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
            timeout: config.request_timeout(),
        })
    }

    /// Absolute URL for an API path, or `NotConfigured` without a base URL.
    pub fn endpoint(&self, path: &str) -> Result<String, BackendError> {
        let base = self.base_url.as_deref().ok_or(BackendError::NotConfigured)?;
        Ok(format!("{}{}", base, path))
    }

    /// `GET /api/` health check.
    pub async fn ping(&self) -> Result<HealthStatus, BackendError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.execute(self.client.get(&url), &url).await?;
        let body = read_body(response, &url).await?;
        serde_json::from_slice(&body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    /// `GET /api/resume`, buffered into memory.
    pub async fn fetch_resume(&self) -> Result<Document, BackendError> {
        let url = self.endpoint(RESUME_PATH)?;
        let response = self.execute(self.client.get(&url), &url).await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response, &url).await?;
            let detail = parse_error_detail(&body).unwrap_or_else(|| status.to_string());
            return Err(BackendError::MalformedResponse(format!(
                "resume request returned {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let headers = response.headers();
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name);
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = read_body(response, &url).await?;
        Ok(Document {
            file_name,
            content_type,
            bytes,
        })
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<Response, BackendError> {
        builder
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e, url))
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            BackendError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

impl ContactBackend for HttpBackend {
    async fn send_contact(&self, request: &ContactRequest) -> Result<ContactReply, BackendError> {
        let url = self.endpoint(CONTACT_PATH)?;
        let response = self
            .execute(self.client.post(&url).json(request), &url)
            .await?;

        let status = response.status();
        let body = read_body(response, &url).await?;

        if status.is_success() {
            parse_contact_reply(&body)
        } else {
            tracing::debug!(status = status.as_u16(), "Contact endpoint returned error status");
            Ok(ContactReply::declined(parse_error_detail(&body)))
        }
    }
}

async fn read_body(response: Response, url: &str) -> Result<Vec<u8>, BackendError> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| BackendError::Transport {
            url: url.to_string(),
            source: e,
        })
}

/// Pull `filename` out of a `Content-Disposition` header value.
pub fn attachment_file_name(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        // Never let a header choose a path outside the target directory.
        .map(|name| {
            name.rsplit(['/', '\\'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .filter(|name| !name.is_empty() && name != "." && name != "..")
}
