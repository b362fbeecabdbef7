//! Microsoft Teams notifications.
//!
//! Status changes are rendered as legacy connector cards (`MessageCard`) and
//! posted to a channel's incoming webhook:
//!
//! - a branding section,
//! - a headline derived from the heartbeat status,
//! - a description section with the event message and `Monitor`/`URL` facts.

mod payload;
mod provider;

pub use payload::{
    BRAND_IMAGE_URL, CardContent, Fact, MessageCard, Section, build_card, status_message,
    theme_color,
};
pub use provider::TeamsProvider;

/// Tracing target for Teams delivery.
pub const TRACING_TARGET: &str = "neouptime_notify::teams";
