//! Runs the check-result walk-through against the live Hunter.io API.
//!
//! Reads `HUNTER_API_KEY` (and optional `HUNTER_BASE_URL`, `HUNTER_TIMEOUT_SECS`,
//! `HUNTER_DEMO_EMAIL`) from the environment or a `.env` file.

use hunter_client::demo::crud_demonstration;
use hunter_client::{CheckRecord, Client, Config, EmailCheckService};
use std::process::ExitCode;

const DEFAULT_DEMO_EMAIL: &str = "test@example.com";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> hunter_client::Result<()> {
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded: {config:?}");

    let email = std::env::var("HUNTER_DEMO_EMAIL").unwrap_or_else(|_| DEFAULT_DEMO_EMAIL.into());
    let service = EmailCheckService::in_memory(Client::from_config(&config)?);

    println!("Checking {email}...");
    let report = crud_demonstration(&service, &email).await?;

    println!("create: {}", describe(report.created.as_ref()));
    println!("update: {}", describe(report.updated.as_ref()));
    println!("delete: {}", describe(report.deleted.as_ref()));
    Ok(())
}

fn describe(record: Option<&CheckRecord>) -> String {
    match record {
        Some(r) => match r.score {
            Some(score) => format!("{} -> {} (score {score})", r.id, r.status),
            None => format!("{} -> {}", r.id, r.status),
        },
        None => "not found".to_string(),
    }
}
