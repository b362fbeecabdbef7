//! Reqwest-based HTTP transport for webhook delivery.
//!
//! This module provides a reqwest-based implementation of the [`WebhookTransport`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use neouptime_notify::reqwest::{ReqwestClient, ReqwestConfig};
//! use neouptime_notify::teams::TeamsProvider;
//! use neouptime_notify::NotificationService;
//!
//! let client = ReqwestClient::new(ReqwestConfig::default())?;
//! let service = NotificationService::new(TeamsProvider::new(client));
//! ```
//!
//! [`WebhookTransport`]: crate::WebhookTransport

mod client;
mod config;
mod error;

pub use client::ReqwestClient;
pub use config::ReqwestConfig;

/// Tracing target for reqwest transport operations.
pub const TRACING_TARGET: &str = "neouptime_notify::reqwest";
