//! Notification target and event arguments.

use anyhow::ensure;
use clap::Args;
use neouptime_notify::{Heartbeat, Monitor, NotificationConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Message sent when no heartbeat is given.
const DEFAULT_MESSAGE: &str = "NeoUptime Testing";

/// Webhook target and the event to deliver.
///
/// Monitor and heartbeat documents use the host application's JSON format.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct EventArgs {
    /// Webhook URL receiving the notification
    #[arg(long, env = "WEBHOOK_URL")]
    pub webhook_url: String,

    /// Message of a general notification (ignored when a heartbeat is given)
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Monitor document, e.g. '{"type":"http","name":"API","url":"https://api.example.com"}'
    #[arg(long, value_parser = parse_json::<Monitor>)]
    pub monitor: Option<Monitor>,

    /// Heartbeat document, e.g. '{"status":0,"msg":"connect ECONNREFUSED"}'
    #[arg(long, value_parser = parse_json::<Heartbeat>)]
    pub heartbeat: Option<Heartbeat>,
}

/// An event ready to be handed to a provider.
#[derive(Debug, Clone)]
pub struct Event {
    pub config: NotificationConfig,
    pub message: String,
    pub monitor: Option<Monitor>,
    pub heartbeat: Option<Heartbeat>,
}

impl EventArgs {
    /// Checks presence of the required fields and assembles the event.
    pub fn resolve(&self) -> anyhow::Result<Event> {
        ensure!(
            !self.webhook_url.trim().is_empty(),
            "webhook URL must not be empty"
        );

        Ok(Event {
            config: NotificationConfig::new(self.webhook_url.clone()),
            message: self.message.clone(),
            monitor: self.monitor.clone(),
            heartbeat: self.heartbeat.clone(),
        })
    }
}

fn parse_json<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_str(value).map_err(|e| format!("invalid JSON document: {e}"))
}
