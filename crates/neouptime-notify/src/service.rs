//! Notification service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    Heartbeat, Monitor, NotificationConfig, NotificationProvider, Result, TRACING_TARGET,
};

/// Notification service wrapper with observability.
///
/// This wrapper adds structured logging to any notification provider.
/// The inner provider is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct NotificationService {
    inner: Arc<dyn NotificationProvider>,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("provider", &self.inner.name())
            .finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Create a new notification service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: NotificationProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Returns the name of the wrapped provider.
    pub fn provider_name(&self) -> &'static str {
        self.inner.name()
    }

    /// Sends a notification through the wrapped provider.
    pub async fn send(
        &self,
        config: &NotificationConfig,
        message: &str,
        monitor: Option<&Monitor>,
        heartbeat: Option<&Heartbeat>,
    ) -> Result<String> {
        let started_at = Instant::now();
        let provider = self.inner.name();

        tracing::debug!(
            target: TRACING_TARGET,
            provider,
            has_monitor = monitor.is_some(),
            has_heartbeat = heartbeat.is_some(),
            "Sending notification"
        );

        let result = self.inner.send(config, message, monitor, heartbeat).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    target: TRACING_TARGET,
                    provider,
                    elapsed_ms = elapsed.as_millis(),
                    "Notification sent"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    provider,
                    kind = error.kind_str(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Notification delivery failed"
                );
            }
        }

        result
    }
}
