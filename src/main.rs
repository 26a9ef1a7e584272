use std::process::ExitCode;

use clap::Parser;

use portfolio_contact::cli::{Cli, Command};
use portfolio_contact::commands;
use portfolio_contact::config::{Config, BASE_URL_ENV};
use portfolio_contact::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
            config
        }
        None => Config::load()?,
    };
    config.apply_base_url_override(cli.base_url.clone());
    config.validate()?;

    let code = match &cli.command {
        Command::Send(args) => {
            let outcome = commands::send(&config, args).await?;
            if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Resume(args) => {
            let report = commands::resume(&config, args).await?;
            if report.is_opened() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Ping => {
            commands::ping(&config).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
