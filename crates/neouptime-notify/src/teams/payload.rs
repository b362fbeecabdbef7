//! MessageCard document construction.

use serde::{Deserialize, Serialize};

use crate::MonitorStatus;

/// Schema marker of legacy connector cards.
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// Card type understood by incoming webhooks.
pub const CARD_TYPE: &str = "MessageCard";

/// Icon shown in the branding section.
pub const BRAND_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/tomtoe6600/uptime-kuma/master/public/icon.png";

/// Title of the branding section.
pub const BRAND_TITLE: &str = "**NeoUptime**";

/// Title of the description section.
pub const DESCRIPTION_TITLE: &str = "**Description**";

/// Theme colors, as hex RGB without a leading `#`.
pub const COLOR_DOWN: &str = "ff0000";
pub const COLOR_UP: &str = "00e804";
pub const COLOR_DEFAULT: &str = "008cff";

/// Summary used when the status has no dedicated wording.
pub const GENERIC_SUMMARY: &str = "Notification";

/// Address placeholder stored by monitors that never had a URL set.
const EMPTY_URL_PLACEHOLDER: &str = "https://";

/// Inputs of a single card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardContent<'a> {
    /// Heartbeat status; `None` for general notifications.
    pub status: Option<MonitorStatus>,
    /// Free text shown in the description section.
    pub message: &'a str,
    pub monitor_name: Option<&'a str>,
    pub monitor_url: Option<&'a str>,
}

impl<'a> CardContent<'a> {
    /// Content of a general notification carrying only a message.
    pub fn general(message: &'a str) -> Self {
        Self {
            message,
            ..Default::default()
        }
    }
}

/// A connector card as posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCard {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub card_type: String,
    pub theme_color: String,
    pub summary: String,
    pub sections: Vec<Section>,
}

/// A display section of a [`MessageCard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_image: Option<String>,
    pub activity_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<Fact>>,
}

/// A name/value pair rendered as a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Human-readable headline for a status change.
pub fn status_message(status: Option<MonitorStatus>, monitor_name: Option<&str>) -> String {
    let name = monitor_name.unwrap_or_default();
    match status {
        Some(MonitorStatus::Down) => format!("🔴 Application [{name}] went down"),
        Some(MonitorStatus::Up) => format!("✅ Application [{name}] is back online"),
        _ => GENERIC_SUMMARY.to_owned(),
    }
}

/// Card accent color for a status change.
pub fn theme_color(status: Option<MonitorStatus>) -> &'static str {
    match status {
        Some(MonitorStatus::Down) => COLOR_DOWN,
        Some(MonitorStatus::Up) => COLOR_UP,
        _ => COLOR_DEFAULT,
    }
}

/// Builds the card for the given content.
pub fn build_card(content: &CardContent<'_>) -> MessageCard {
    let headline = status_message(content.status, content.monitor_name);

    let mut facts = Vec::with_capacity(2);
    if let Some(name) = content.monitor_name.filter(|name| !name.is_empty()) {
        facts.push(Fact::new("Monitor", name));
    }
    if let Some(url) = content
        .monitor_url
        .filter(|url| !url.is_empty() && *url != EMPTY_URL_PLACEHOLDER)
    {
        facts.push(Fact::new("URL", url));
    }

    MessageCard {
        context: CARD_CONTEXT.to_owned(),
        card_type: CARD_TYPE.to_owned(),
        theme_color: theme_color(content.status).to_owned(),
        summary: headline.clone(),
        sections: vec![
            Section {
                activity_image: Some(BRAND_IMAGE_URL.to_owned()),
                activity_title: BRAND_TITLE.to_owned(),
                ..Default::default()
            },
            Section {
                activity_title: headline,
                ..Default::default()
            },
            Section {
                activity_title: DESCRIPTION_TITLE.to_owned(),
                text: Some(content.message.to_owned()),
                facts: Some(facts),
                ..Default::default()
            },
        ],
    }
}
