use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Contact form and resume client for the portfolio backend.
#[derive(Debug, Parser)]
#[command(name = "portfolio-contact", version, about)]
pub struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding config and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message through the contact form.
    Send(SendArgs),
    /// Open or download the resume.
    Resume(ResumeArgs),
    /// Check that the backend is reachable.
    Ping,
}

/// Fields left out are prompted for on stdin.
#[derive(Debug, Default, Args)]
pub struct SendArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
    /// Use the offline stand-in backend instead of the network.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Default, Args)]
pub struct ResumeArgs {
    /// Download into DIR (or the configured directory) instead of opening a browser.
    #[arg(long, value_name = "DIR")]
    pub download: Option<Option<PathBuf>>,
}
