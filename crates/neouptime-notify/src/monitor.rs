//! Monitor and heartbeat descriptors received from the host application.

use serde::{Deserialize, Deserializer, Serialize};

/// Address family of a monitor, derived from its raw `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorKind {
    /// HTTP-like monitors, addressed by `url`.
    Http,
    /// Docker container monitors, addressed by `docker_host`.
    Docker,
    /// Everything else, addressed by `hostname`.
    Other,
}

impl MonitorKind {
    /// Classifies a raw monitor type tag.
    ///
    /// Matching is exact. `"keywork"` is accepted as an HTTP alias as stored
    /// by existing configurations; `"keyword"` is not.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "http" | "keywork" => Self::Http,
            "docker" => Self::Docker,
            _ => Self::Other,
        }
    }
}

/// Status reported by a heartbeat.
///
/// Encoded as an integer on the wire. Values outside the known set are kept
/// as [`MonitorStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MonitorStatus {
    /// The last check failed.
    Down,
    /// The last check succeeded.
    Up,
    /// A failure is being retried before the monitor is marked down.
    Pending,
    /// The monitor is inside a maintenance window.
    Maintenance,
    /// A status code this crate does not know about.
    Unknown(i64),
}

impl From<i64> for MonitorStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Pending,
            3 => Self::Maintenance,
            other => Self::Unknown(other),
        }
    }
}

impl From<MonitorStatus> for i64 {
    fn from(status: MonitorStatus) -> Self {
        match status {
            MonitorStatus::Down => 0,
            MonitorStatus::Up => 1,
            MonitorStatus::Pending => 2,
            MonitorStatus::Maintenance => 3,
            MonitorStatus::Unknown(other) => other,
        }
    }
}

/// The monitor affected by a status change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Raw monitor type tag, e.g. `"http"`, `"docker"`, `"ping"`.
    #[serde(rename = "type", default)]
    pub monitor_type: Option<String>,
    /// Display name of the monitor.
    #[serde(default)]
    pub name: Option<String>,
    /// Target URL of HTTP-like monitors.
    #[serde(default)]
    pub url: Option<String>,
    /// Docker host of container monitors.
    #[serde(default)]
    pub docker_host: Option<String>,
    /// Hostname of every other monitor type.
    #[serde(default)]
    pub hostname: Option<String>,
}

impl Monitor {
    /// Creates a monitor descriptor with the given type tag and name.
    pub fn new(monitor_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            monitor_type: Some(monitor_type.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the target URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the Docker host.
    pub fn with_docker_host(mut self, docker_host: impl Into<String>) -> Self {
        self.docker_host = Some(docker_host.into());
        self
    }

    /// Sets the hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Returns the address family of this monitor.
    pub fn kind(&self) -> MonitorKind {
        self.monitor_type
            .as_deref()
            .map_or(MonitorKind::Other, MonitorKind::from_tag)
    }

    /// Returns the address field selected by the monitor's kind.
    pub fn address(&self) -> Option<&str> {
        match self.kind() {
            MonitorKind::Http => self.url.as_deref(),
            MonitorKind::Docker => self.docker_host.as_deref(),
            MonitorKind::Other => self.hostname.as_deref(),
        }
    }
}

/// A single status-check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heartbeat {
    /// Outcome of the check.
    pub status: MonitorStatus,
    /// Free-text detail of the check; `null` reads as empty.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub msg: String,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Heartbeat {
    /// Creates a heartbeat with the given status and message.
    pub fn new(status: MonitorStatus, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }
}
