//! vms-status-sync - DMS webhook to VMS status propagation
//!
//! Reads one webhook event as JSON (from a file or stdin), syncs it to the
//! VMS configured through `VMS_HOST` / `API_KEY`, and prints the order
//! update payload to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vms_status_sync::{StatusSync, VmsConfig, WebhookEvent};

#[derive(Parser)]
#[command(name = "vms-status-sync")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Propagate a DMS consignment status change to the VMS")]
struct Cli {
    /// Webhook event JSON file; stdin when omitted
    event: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_event(path: Option<&PathBuf>) -> Result<WebhookEvent> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Failed to parse webhook event")
}

async fn run(cli: Cli) -> Result<serde_json::Value> {
    let event = read_event(cli.event.as_ref())?;
    let config = VmsConfig::from_env()?;
    let sync = StatusSync::from_config(config)?;
    Ok(sync.handle(&event).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the result payload
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vms_status_sync={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(payload) => {
            println!("{}", payload);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Status sync failed");
            ExitCode::FAILURE
        }
    }
}
