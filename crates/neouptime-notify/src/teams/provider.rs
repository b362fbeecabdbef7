//! Microsoft Teams incoming-webhook provider.

use std::sync::Arc;

use super::TRACING_TARGET;
use super::payload::{CardContent, MessageCard, build_card};
use crate::{
    Heartbeat, Monitor, NotificationConfig, NotificationProvider, Result, SENT_SUCCESSFULLY,
    WebhookTransport, translate_transport_error,
};

/// Delivers monitor events to a Teams channel as connector cards.
///
/// # Examples
///
/// ```rust,ignore
/// use neouptime_notify::reqwest::{ReqwestClient, ReqwestConfig};
/// use neouptime_notify::teams::TeamsProvider;
/// use neouptime_notify::{Heartbeat, Monitor, MonitorStatus, NotificationConfig};
///
/// let provider = TeamsProvider::new(ReqwestClient::new(ReqwestConfig::default())?);
/// let config = NotificationConfig::new("https://example.webhook.office.com/webhookb2/...");
/// let monitor = Monitor::new("http", "API").with_url("https://api.example.com");
/// let heartbeat = Heartbeat::new(MonitorStatus::Up, "200 - OK");
///
/// provider.send(&config, "", Some(&monitor), Some(&heartbeat)).await?;
/// ```
#[derive(Clone)]
pub struct TeamsProvider {
    transport: Arc<dyn WebhookTransport>,
}

impl std::fmt::Debug for TeamsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamsProvider").finish_non_exhaustive()
    }
}

impl TeamsProvider {
    /// Provider identifier.
    pub const NAME: &'static str = "teams";

    /// Creates a provider posting through the given transport.
    pub fn new<T>(transport: T) -> Self
    where
        T: WebhookTransport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Builds the card for an event without sending it.
    ///
    /// Without a heartbeat the card only carries `message`, even when a
    /// monitor is given.
    pub fn build_payload(
        message: &str,
        monitor: Option<&Monitor>,
        heartbeat: Option<&Heartbeat>,
    ) -> MessageCard {
        let Some(heartbeat) = heartbeat else {
            return build_card(&CardContent::general(message));
        };

        build_card(&CardContent {
            status: Some(heartbeat.status),
            message: &heartbeat.msg,
            monitor_name: monitor.and_then(|monitor| monitor.name.as_deref()),
            monitor_url: monitor.and_then(Monitor::address),
        })
    }

    async fn transmit(&self, webhook_url: &str, card: &MessageCard) -> Result<()> {
        let body = serde_json::to_value(card)?;
        let response = self
            .transport
            .post_json(webhook_url, &body)
            .await
            .map_err(translate_transport_error)?;

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %response.request_id,
            status_code = response.status_code,
            "Card accepted by webhook"
        );

        Ok(())
    }
}

#[async_trait::async_trait]
impl NotificationProvider for TeamsProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn send(
        &self,
        config: &NotificationConfig,
        message: &str,
        monitor: Option<&Monitor>,
        heartbeat: Option<&Heartbeat>,
    ) -> Result<String> {
        let card = Self::build_payload(message, monitor, heartbeat);
        self.transmit(&config.webhook_url, &card).await?;
        Ok(SENT_SUCCESSFULLY.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use jiff::Timestamp;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::{ErrorKind, MonitorStatus, TransportError, WebhookResponse};

    /// Records every post and answers with a fixed outcome.
    #[derive(Default)]
    struct RecordingTransport {
        posts: Arc<Mutex<Vec<(String, Value)>>>,
        reject_with_status: Option<(u16, &'static str)>,
    }

    #[async_trait::async_trait]
    impl WebhookTransport for RecordingTransport {
        async fn post_json(
            &self,
            url: &str,
            body: &Value,
        ) -> std::result::Result<WebhookResponse, TransportError> {
            self.posts
                .lock()
                .unwrap()
                .push((url.to_owned(), body.clone()));

            match self.reject_with_status {
                Some((status, body)) => Err(TransportError::Status {
                    status,
                    body: body.to_owned(),
                }),
                None => Ok(WebhookResponse::new(Uuid::now_v7(), 200, Timestamp::now())),
            }
        }
    }

    fn provider() -> (TeamsProvider, Arc<Mutex<Vec<(String, Value)>>>) {
        let transport = RecordingTransport::default();
        let posts = transport.posts.clone();
        (TeamsProvider::new(transport), posts)
    }

    #[tokio::test]
    async fn test_send_heartbeat_up() {
        let (provider, posts) = provider();
        let config = NotificationConfig::new("https://x");
        let monitor = Monitor::new("http", "API").with_url("https://api.example.com");
        let heartbeat = Heartbeat::new(MonitorStatus::Up, "All good");

        let ack = provider
            .send(&config, "ignored", Some(&monitor), Some(&heartbeat))
            .await
            .unwrap();
        assert_eq!(ack, "Sent Successfully.");

        let posts = posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        let (url, body) = &posts[0];
        assert_eq!(url, "https://x");
        assert_eq!(body["summary"], "✅ Application [API] is back online");
        assert_eq!(body["themeColor"], "00e804");
        assert_eq!(body["sections"][2]["text"], "All good");
        assert_eq!(
            body["sections"][2]["facts"],
            json!([
                { "name": "Monitor", "value": "API" },
                { "name": "URL", "value": "https://api.example.com" },
            ])
        );
    }

    #[tokio::test]
    async fn test_send_general_notification_ignores_monitor() {
        let (provider, posts) = provider();
        let config = NotificationConfig::new("https://x");
        let monitor = Monitor::new("http", "API").with_url("https://api.example.com");

        provider
            .send(&config, "NeoUptime test message", Some(&monitor), None)
            .await
            .unwrap();

        let posts = posts.lock().unwrap();
        let body = &posts[0].1;
        assert_eq!(body["summary"], "Notification");
        assert_eq!(body["themeColor"], "008cff");
        assert_eq!(body["sections"][2]["text"], "NeoUptime test message");
        assert_eq!(body["sections"][2]["facts"], json!([]));
    }

    #[test]
    fn test_build_payload_docker_down() {
        let monitor = Monitor::new("docker", "worker")
            .with_url("https://")
            .with_docker_host("tcp://10.0.0.5:2375");
        let heartbeat = Heartbeat::new(MonitorStatus::Down, "container exited");

        let card = TeamsProvider::build_payload("", Some(&monitor), Some(&heartbeat));

        assert_eq!(card.summary, "🔴 Application [worker] went down");
        assert_eq!(card.theme_color, "ff0000");
        let facts = card.sections[2].facts.clone().unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1].value, "tcp://10.0.0.5:2375");
    }

    #[test]
    fn test_build_payload_heartbeat_without_monitor() {
        let heartbeat = Heartbeat::new(MonitorStatus::Pending, "retrying");
        let card = TeamsProvider::build_payload("", None, Some(&heartbeat));

        assert_eq!(card.summary, "Notification");
        assert_eq!(card.sections[2].text.as_deref(), Some("retrying"));
        assert_eq!(card.sections[2].facts, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_send_translates_transport_failure() {
        let transport = RecordingTransport {
            reject_with_status: Some((400, "Summary or Text is required.")),
            ..Default::default()
        };
        let provider = TeamsProvider::new(transport);
        let config = NotificationConfig::new("https://x");

        let error = provider
            .send(&config, "hello", None, None)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert!(
            error
                .message
                .as_deref()
                .unwrap()
                .ends_with("Summary or Text is required.")
        );
    }

    #[test]
    fn test_provider_name() {
        let (provider, _) = provider();
        assert_eq!(provider.name(), "teams");
    }
}
