//! Reqwest transport configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Configuration for the reqwest HTTP transport.
///
/// Leaving the timeout unset keeps reqwest's default, which never times out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ReqwestConfig {
    /// HTTP request timeout in seconds
    #[cfg_attr(
        feature = "config",
        arg(long = "http-timeout", env = "HTTP_TIMEOUT")
    )]
    #[serde(default)]
    pub http_timeout: Option<u64>,

    /// User-Agent header to send with requests
    #[cfg_attr(
        feature = "config",
        arg(long = "http-user-agent", env = "HTTP_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ReqwestConfig {
    /// Returns the configured timeout, if any.
    ///
    /// A zero timeout is treated as unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.http_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Returns the effective user agent, using default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    fn default_user_agent() -> String {
        format!("neouptime/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http_timeout = Some(timeout_secs);
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
