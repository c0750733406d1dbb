//! adguard-list-manager - bulk blocklist/allowlist management for AdGuard Home

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use adguard_list_manager::cli::Cli;
use adguard_list_manager::config::{Config, ConnectionConfig};
use adguard_list_manager::dispatch::{self, Outcome, Request};
use adguard_list_manager::prompt::StdinPrompt;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Something bad happened! See the error for more details:");
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    let prompt = StdinPrompt::new();

    let file_connection = match &cli.config {
        Some(path) => Config::load(path)?.connection,
        None => ConnectionConfig::default(),
    };

    let plan = dispatch::plan_from(cli.list_type.clone(), cli.list_action.clone(), &prompt)?;
    let connection = cli.connection().or(file_connection).complete(&prompt)?;

    let request = Request {
        plan,
        selection: cli.selection(),
        connection,
        dry_run: cli.dry_run,
    };

    let outcome = dispatch::run(request, &prompt).await?;
    if let Outcome::Completed(report) = &outcome {
        println!("{}", report);
    }
    Ok(outcome)
}
