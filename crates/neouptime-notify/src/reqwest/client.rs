//! Reqwest-based HTTP client for webhook delivery.

use std::sync::Arc;

use jiff::Timestamp;
use reqwest::Client;
use uuid::Uuid;

use super::{ReqwestConfig, TRACING_TARGET};
use crate::{Error, Result, TransportError, WebhookResponse, WebhookTransport};

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    config: ReqwestConfig,
}

/// Reqwest-based HTTP client posting notification documents to webhooks.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TLS backend cannot be initialized.
    pub fn new(config: ReqwestConfig) -> Result<Self> {
        let timeout = config.timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            timeout = ?timeout,
            user_agent = %user_agent,
            "Creating reqwest client"
        );

        let mut builder = Client::builder().user_agent(&user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            Error::configuration()
                .with_message("Failed to create HTTP client")
                .with_source(e)
        })?;

        let inner = ReqwestClientInner { http, config };
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }
}

#[async_trait::async_trait]
impl WebhookTransport for ReqwestClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookResponse, TransportError> {
        let started_at = Timestamp::now();
        let request_id = Uuid::now_v7();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request_id,
            url = %url,
            "Posting webhook payload"
        );

        let http_response = self.inner.http.post(url).json(body).send().await?;
        let status = http_response.status();

        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();

            tracing::debug!(
                target: TRACING_TARGET,
                request_id = %request_id,
                status_code = status.as_u16(),
                "Webhook endpoint rejected payload"
            );

            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response = WebhookResponse::new(request_id, status.as_u16(), started_at);

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request_id,
            status_code = response.status_code,
            duration = %response.duration(),
            "Webhook delivery completed"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::teams::TeamsProvider;
    use crate::{ErrorKind, Heartbeat, Monitor, MonitorStatus, NotificationConfig};
    use crate::{NotificationProvider, NotificationService};

    fn client() -> ReqwestClient {
        ReqwestClient::new(ReqwestConfig::default()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestClient::new(ReqwestConfig::default().with_timeout(5)).unwrap();
        assert_eq!(client.config().http_timeout, Some(5));
    }

    #[tokio::test]
    async fn test_post_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "text": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("1"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client()
            .post_json(&format!("{}/hook", server.uri()), &json!({ "text": "hi" }))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_post_json_rejected_captures_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid webhook URL"))
            .mount(&server)
            .await;

        let error = client()
            .post_json(&server.uri(), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(error, TransportError::Status { status: 400, .. }));
        assert_eq!(error.response_body(), Some("Invalid webhook URL"));
    }

    #[tokio::test]
    async fn test_post_json_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let error = client().post_json(&uri, &json!({})).await.unwrap_err();
        assert!(matches!(error, TransportError::Request(_)));
    }

    #[tokio::test]
    async fn test_teams_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhookb2/abc"))
            .and(body_json(json!({
                "@context": "https://schema.org/extensions",
                "@type": "MessageCard",
                "themeColor": "00e804",
                "summary": "✅ Application [API] is back online",
                "sections": [
                    {
                        "activityImage": crate::teams::BRAND_IMAGE_URL,
                        "activityTitle": "**NeoUptime**",
                    },
                    { "activityTitle": "✅ Application [API] is back online" },
                    {
                        "activityTitle": "**Description**",
                        "text": "All good",
                        "facts": [
                            { "name": "Monitor", "value": "API" },
                            { "name": "URL", "value": "https://api.example.com" },
                        ],
                    },
                ],
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let service = NotificationService::new(TeamsProvider::new(client()));
        let config = NotificationConfig::new(format!("{}/webhookb2/abc", server.uri()));
        let monitor = Monitor::new("http", "API").with_url("https://api.example.com");
        let heartbeat = Heartbeat::new(MonitorStatus::Up, "All good");

        let ack = service
            .send(&config, "ignored", Some(&monitor), Some(&heartbeat))
            .await
            .unwrap();
        assert_eq!(ack, "Sent Successfully.");
    }

    #[tokio::test]
    async fn test_teams_server_error_is_translated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = TeamsProvider::new(client());
        let config = NotificationConfig::new(server.uri());

        let error = provider
            .send(&config, "general", None, None)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert_eq!(
            error.message.as_deref(),
            Some("Error: webhook endpoint responded with status 500 upstream unavailable")
        );
    }

    #[tokio::test]
    async fn test_teams_invalid_url_is_translated() {
        let provider = TeamsProvider::new(client());
        let config = NotificationConfig::new("not a url");

        let error = provider.send(&config, "x", None, None).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NetworkError);
        assert!(error.message.as_deref().unwrap().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_teams_timeout_is_translated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = ReqwestClient::new(ReqwestConfig::default().with_timeout(1)).unwrap();
        let provider = TeamsProvider::new(client);
        let config = NotificationConfig::new(server.uri());

        let error = provider
            .send(&config, "slow", None, None)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Timeout);
        assert!(
            error
                .message
                .as_deref()
                .unwrap()
                .starts_with("Error: request timed out")
        );
    }
}
