//! Subcommand handlers: the "UI layer" that feeds the form and the launcher.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::backend::{ContactBackend, HttpBackend, MockBackend};
use crate::cli::{ResumeArgs, SendArgs};
use crate::config::Config;
use crate::form::{FieldName, FieldStore};
use crate::notify::ConsoleSink;
use crate::resume::{BrowserOpener, DownloadOpener, LaunchReport, ResumeLauncher};
use crate::submission::{SubmissionController, SubmissionOutcome};

/// Copy the values given on the command line into the store.
pub fn fill_from_args(store: &FieldStore, args: &SendArgs) {
    let given = [
        (FieldName::Name, &args.name),
        (FieldName::Email, &args.email),
        (FieldName::Subject, &args.subject),
        (FieldName::Message, &args.message),
    ];
    for (field, value) in given {
        if let Some(value) = value {
            store.set(field, value.as_str());
        }
    }
}

/// Ask for every field that is still empty, one line each.
///
/// Stops quietly at end of input; validation reports what is missing.
pub fn prompt_missing(
    store: &FieldStore,
    mut input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    for field in FieldName::ALL {
        if !store.get(field).is_empty() {
            continue;
        }
        write!(output, "{}: ", field.label())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        store.set(field, line.trim_end_matches(['\r', '\n']));
    }
    Ok(())
}

pub async fn send(config: &Config, args: &SendArgs) -> anyhow::Result<SubmissionOutcome> {
    let store = FieldStore::new();
    fill_from_args(&store, args);
    prompt_missing(&store, std::io::stdin().lock(), std::io::stdout())
        .context("Failed to read form input")?;

    let timeout = config.backend.request_timeout();
    if args.dry_run {
        submit_with(MockBackend::default(), store, timeout).await
    } else {
        let backend = HttpBackend::new(&config.backend)?;
        submit_with(backend, store, timeout).await
    }
}

async fn submit_with<B: ContactBackend>(
    backend: B,
    store: FieldStore,
    timeout: Duration,
) -> anyhow::Result<SubmissionOutcome> {
    let controller =
        SubmissionController::new(backend, ConsoleSink::stdout(), store).with_timeout(timeout);
    controller
        .submit_current()
        .await
        .ok_or_else(|| anyhow!("A submission is already in progress"))
}

pub async fn resume(config: &Config, args: &ResumeArgs) -> anyhow::Result<LaunchReport> {
    let backend = HttpBackend::new(&config.backend)?;

    let report = match &args.download {
        Some(dir) => {
            let dir = dir
                .clone()
                .or_else(|| config.resume.download_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            ResumeLauncher::new(backend, DownloadOpener::new(dir))
                .open_resume()
                .await
        }
        None => {
            ResumeLauncher::new(backend, BrowserOpener::new())
                .open_resume()
                .await
        }
    };

    match &report {
        LaunchReport::Opened { target } => println!("Resume: {}", target),
        LaunchReport::Skipped { reason } => println!("Resume unavailable: {}", reason),
    }
    Ok(report)
}

pub async fn ping(config: &Config) -> anyhow::Result<()> {
    let backend = HttpBackend::new(&config.backend)?;
    let status = backend.ping().await.context("Backend health check failed")?;
    println!("{}", status.message);
    Ok(())
}
