//! Per-notification configuration supplied by the host application.

use serde::{Deserialize, Serialize};

/// Configuration of a single notification target.
///
/// The webhook URL is opaque: its format is not validated here, the transport
/// reports malformed URLs when the request is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    /// Endpoint receiving the notification document.
    pub webhook_url: String,
}

impl NotificationConfig {
    /// Creates a configuration targeting the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }
}
