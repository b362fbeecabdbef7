//! Outbound webhook transport abstraction.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::BoxedError;

/// Failure of a single webhook transmission.
///
/// Providers never surface this type directly: it is converted with
/// [`translate_transport_error`](crate::translate_transport_error).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the transport's timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxedError),
    /// The request could not be sent or its response could not be read.
    #[error("request failed: {0}")]
    Request(#[source] BoxedError),
    /// The endpoint answered with a non-success status code.
    #[error("webhook endpoint responded with status {status}")]
    Status {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },
}

impl TransportError {
    /// Returns the response body sent back with a rejected request, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Receipt of a successful webhook transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Identifier of the request, for log correlation.
    pub request_id: Uuid,
    /// HTTP status code from the webhook endpoint.
    pub status_code: u16,
    /// Timestamp when the request was initiated.
    pub started_at: Timestamp,
    /// Timestamp when the response was received.
    pub finished_at: Timestamp,
}

impl WebhookResponse {
    /// Creates a new webhook response finished now.
    pub fn new(request_id: Uuid, status_code: u16, started_at: Timestamp) -> Self {
        Self {
            request_id,
            status_code,
            started_at,
            finished_at: Timestamp::now(),
        }
    }

    /// Returns whether the delivery was successful (2xx status code).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Calculates the response time as a duration.
    pub fn duration(&self) -> jiff::Span {
        self.started_at.until(self.finished_at).unwrap_or_default()
    }
}

/// Posts JSON documents to webhook endpoints.
///
/// Implementations issue exactly one request per call and treat any non-2xx
/// status as a failure. They do not retry.
#[async_trait::async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Posts `body` as `application/json` to `url`.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookResponse, TransportError>;
}
