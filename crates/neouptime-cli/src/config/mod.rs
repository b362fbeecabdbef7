//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── provider: ProviderKind   # Which notification provider renders the event
//! ├── event: EventArgs         # Webhook URL, message, monitor and heartbeat
//! └── http: ReqwestConfig      # Transport timeout and user agent
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//!
//! # Example
//!
//! ```bash
//! neouptime-notify --webhook-url "https://example.webhook.office.com/..." \
//!     --monitor '{"type":"http","name":"API","url":"https://api.example.com"}' \
//!     --heartbeat '{"status":0,"msg":"connect ECONNREFUSED"}'
//!
//! # Or via environment variables
//! WEBHOOK_URL="https://example.webhook.office.com/..." neouptime-notify --message "hello"
//! ```

mod event;

use clap::{Parser, ValueEnum};
pub use event::EventArgs;
use neouptime_notify::reqwest::ReqwestConfig;
use neouptime_notify::teams::TeamsProvider;
use neouptime_notify::{NotificationProvider, WebhookTransport};
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Notification providers available from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Microsoft Teams incoming webhook.
    #[default]
    Teams,
}

impl ProviderKind {
    /// Creates the provider posting through `transport`.
    pub fn create<T>(self, transport: T) -> impl NotificationProvider + 'static
    where
        T: WebhookTransport + 'static,
    {
        match self {
            Self::Teams => TeamsProvider::new(transport),
        }
    }
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "neouptime-notify")]
#[command(about = "Send a NeoUptime notification to a webhook")]
#[command(version)]
pub struct Cli {
    /// Notification provider.
    #[arg(long, env = "NOTIFICATION_PROVIDER", value_enum, default_value_t)]
    pub provider: ProviderKind,

    /// Notification target and event.
    #[clap(flatten)]
    pub event: EventArgs,

    /// HTTP transport configuration.
    #[clap(flatten)]
    pub http: ReqwestConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs configuration (the webhook URL is treated as a secret).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            provider = ?self.provider,
            has_monitor = self.event.monitor.is_some(),
            has_heartbeat = self.event.heartbeat.is_some(),
            http_timeout_secs = ?self.http.http_timeout,
            "Notification configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
