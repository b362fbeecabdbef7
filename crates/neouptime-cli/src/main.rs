#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::process;

use anyhow::Context;
use neouptime_notify::NotificationService;
use neouptime_notify::reqwest::ReqwestClient;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "neouptime_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "neouptime_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "neouptime_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "notification was not delivered"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing()?;
    cli.log();

    let event = cli.event.resolve().context("invalid notification event")?;
    let client = ReqwestClient::new(cli.http.clone()).context("failed to create HTTP client")?;
    let service = NotificationService::new(cli.provider.create(client));

    let ack = service
        .send(
            &event.config,
            &event.message,
            event.monitor.as_ref(),
            event.heartbeat.as_ref(),
        )
        .await
        .with_context(|| format!("{} provider failed", service.provider_name()))?;

    println!("{ack}");
    Ok(())
}
