use std::future::Future;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;

use crate::backend::{BackendError, HttpBackend};

/// Fallback name when the backend does not advertise one.
pub const DEFAULT_RESUME_FILE: &str = "resume.pdf";

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Launcher { program: String, status: ExitStatus },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gets the resume in front of the user once its URL is known.
///
/// Returns a description of where the document went (a URL or a path).
pub trait DocumentOpener: Send + Sync {
    fn open(
        &self,
        backend: &HttpBackend,
        url: &str,
    ) -> impl Future<Output = Result<String, ResumeError>> + Send;
}

/// Hands the URL to the platform's default handler, outside this process.
///
/// The launcher is awaited: it returns once the handler has the URL.
#[derive(Debug, Clone)]
pub struct BrowserOpener {
    program: String,
    args: Vec<String>,
}

impl BrowserOpener {
    pub fn new() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", &[])
        } else if cfg!(target_os = "windows") {
            Self::with_command("cmd", &["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", &[])
        }
    }

    /// Use a specific launcher; the URL is appended as the last argument.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for BrowserOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentOpener for BrowserOpener {
    async fn open(&self, _backend: &HttpBackend, url: &str) -> Result<String, ResumeError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ResumeError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(ResumeError::Launcher {
                program: self.program.clone(),
                status,
            });
        }
        Ok(url.to_string())
    }
}

/// Downloads the document into a directory.
#[derive(Debug, Clone)]
pub struct DownloadOpener {
    dir: PathBuf,
}

impl DownloadOpener {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentOpener for DownloadOpener {
    async fn open(&self, backend: &HttpBackend, _url: &str) -> Result<String, ResumeError> {
        let document = backend.fetch_resume().await?;
        let file_name = document
            .file_name
            .unwrap_or_else(|| DEFAULT_RESUME_FILE.to_string());
        let path = self.dir.join(file_name);

        tokio::fs::write(&path, &document.bytes)
            .await
            .map_err(|e| ResumeError::Write {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!(
            path = %path.display(),
            bytes = document.bytes.len(),
            content_type = document.content_type.as_deref().unwrap_or("unknown"),
            "Resume saved"
        );
        Ok(path.display().to_string())
    }
}
