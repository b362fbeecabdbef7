#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;
mod monitor;
mod service;
mod transport;

pub mod teams;

#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub mod reqwest;

pub use config::NotificationConfig;
pub use error::{BoxedError, Error, ErrorKind, Result, translate_transport_error};
pub use monitor::{Heartbeat, Monitor, MonitorKind, MonitorStatus};
pub use service::NotificationService;
pub use transport::{TransportError, WebhookResponse, WebhookTransport};

/// Tracing target for notification operations.
pub const TRACING_TARGET: &str = "neouptime_notify";

/// Acknowledgment returned by providers after a successful delivery.
pub const SENT_SUCCESSFULLY: &str = "Sent Successfully.";

/// Core trait for notification delivery providers.
///
/// Each provider turns a monitor event into its vendor-specific document and
/// hands it to a [`WebhookTransport`]. Transport failures must be passed
/// through [`translate_transport_error`] rather than retried or swallowed.
#[async_trait::async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Stable identifier of the provider, e.g. `"teams"`.
    fn name(&self) -> &'static str;

    /// Sends a notification.
    ///
    /// Without a `heartbeat` the call is a general notification built from
    /// `message` alone. With one, `monitor` and `heartbeat` describe the
    /// status change and `message` is ignored.
    async fn send(
        &self,
        config: &NotificationConfig,
        message: &str,
        monitor: Option<&Monitor>,
        heartbeat: Option<&Heartbeat>,
    ) -> Result<String>;
}
