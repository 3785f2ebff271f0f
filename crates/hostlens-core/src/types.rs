//! Record types served by the monitoring backend.
//!
//! Each struct mirrors one row shape of a list or detail endpoint. Every field
//! except `id` is optional: the backend emits `null` freely and the views
//! render missing cells as the sentinel. Timestamps stay as raw strings so
//! the formatter sees exactly what the API sent.
//!
//! Some columns are stored as text on the backend and filled with Python's
//! `str()`, so numbers can arrive as `"0.0"` and missing values as `"None"`.
//! Those fields are decoded leniently.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarOrText<T> {
    Scalar(T),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accept a JSON scalar or its string form. `"None"`, unparseable text and
/// values of any other shape become `None`.
fn lenient_scalar<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Ok(match Option::<ScalarOrText<T>>::deserialize(deserializer)? {
        Some(ScalarOrText::Scalar(v)) => Some(v),
        Some(ScalarOrText::Text(s)) => s.trim().parse().ok(),
        Some(ScalarOrText::Other(_)) | None => None,
    })
}

/// Text column written with `str()`: `"None"` means there was no value.
fn python_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|s| s != "None"))
}

/// An alert raised by a detection rule (`/api/alerts`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub timestamp: Option<String>,
    pub rule_name: Option<String>,
    /// `HIGH`, `MEDIUM` or `LOW`.
    pub severity: Option<String>,
    pub message: Option<String>,
    /// Parsed log event that triggered the alert, if any.
    pub log_event_id: Option<i64>,
}

/// A parsed system log event (`/api/logs/events`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: i64,
    pub timestamp: Option<String>,
    pub log_source: Option<String>,
    pub event_type: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub message: Option<String>,
    pub raw_log: Option<String>,
    pub user: Option<String>,
    pub ip_address: Option<String>,
    pub process_name: Option<String>,
    pub rule_triggered: Option<String>,
}

/// A socket open/close observation (`/api/network/events`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkEvent {
    pub id: i64,
    pub timestamp: Option<String>,
    pub event_type: Option<String>,
    pub pid: Option<i64>,
    pub process_name: Option<String>,
    pub protocol: Option<String>,
    pub laddr_ip: Option<String>,
    pub laddr_port: Option<u16>,
    pub raddr_ip: Option<String>,
    pub raddr_port: Option<u16>,
    pub status: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
    /// Port list of a port-scan detection.
    #[serde(default)]
    pub ports_tried: serde_json::Value,
    #[serde(default)]
    pub snapshot_data: serde_json::Value,
    pub alert_id: Option<i64>,
    #[serde(default)]
    pub raw_event: serde_json::Value,
}

/// A process start/stop observation (`/api/process/events`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessEvent {
    pub id: i64,
    pub timestamp: Option<String>,
    pub event_type: Option<String>,
    pub pid: Option<i64>,
    pub ppid: Option<i64>,
    pub process_name: Option<String>,
    pub exe: Option<String>,
    pub cmdline: Option<String>,
    pub username: Option<String>,
    /// Process start, seconds since the epoch.
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub create_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub cpu_percent: Option<f64>,
    /// Resident set size in bytes.
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub memory_rss: Option<u64>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub memory_vms: Option<u64>,
    /// Previous and current value of a change event (`CMDLINE_CHANGED`, ...).
    #[serde(default, deserialize_with = "python_text")]
    pub old_value: Option<String>,
    #[serde(default, deserialize_with = "python_text")]
    pub new_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub exe_deleted: Option<bool>,
    #[serde(default)]
    pub snapshot_data: serde_json::Value,
    pub alert_id: Option<i64>,
    #[serde(default)]
    pub raw_event: serde_json::Value,
}

/// A host metrics sample (`/api/metrics/latest`). The snapshot body is kept
/// opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub id: i64,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub snapshot: serde_json::Value,
}

/// Live host health (`/api/system/status`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// How long the monitoring service itself has been running.
    pub hids_uptime_seconds: Option<u64>,
    pub system_uptime_seconds: Option<u64>,
    /// Preformatted uptime, preferred over the seconds count when present.
    pub system_uptime_human: Option<String>,
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub memory_used_mb: Option<f64>,
    pub memory_total_mb: Option<f64>,
    pub process_count: Option<u64>,
    /// `{"thread_0": true, ...}`, or `{"error": ...}` when the scheduler is
    /// not running.
    #[serde(default)]
    pub scheduler_threads: serde_json::Value,
}

/// One backend worker thread (`/api/system/threads`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadHealth {
    pub name: String,
    #[serde(default)]
    pub alive: bool,
    /// Local `YYYY-MM-DD HH:MM:SS`, or `N/A` before the first beat.
    pub last_heartbeat: Option<String>,
}

/// A running process from the live listing (`/api/process/active`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveProcess {
    pub pid: i64,
    pub name: Option<String>,
    pub username: Option<String>,
    /// CPU and memory, in percent.
    pub cpu: Option<f64>,
    pub mem: Option<f64>,
    pub cmdline: Option<String>,
}

/// An open socket from the live listing (`/api/network/active`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveConnection {
    pub pid: Option<i64>,
    pub process_name: Option<String>,
    pub protocol: Option<String>,
    pub laddr_ip: Option<String>,
    pub laddr_port: Option<u16>,
    pub raddr_ip: Option<String>,
    pub raddr_port: Option<u16>,
    pub status: Option<String>,
}

/// One event attached to an alert as evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// `TRIGGER`, `SUPPORT` or `CONTEXT`.
    pub role: String,
    pub event_type: String,
    /// The referenced event, as served. Shape depends on `event_type`.
    #[serde(default)]
    pub event: serde_json::Value,
}

/// Body of `/api/alerts/<id>`.
///
/// Newer backends wrap the alert together with its evidence; older ones return
/// the bare alert row. Both deserialize into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertDetail {
    pub alert: Alert,
    pub evidence: Vec<Evidence>,
}

impl<'de> Deserialize<'de> for AlertDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapped {
            alert: Alert,
            #[serde(default)]
            evidence: Option<Vec<Evidence>>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Body {
            Wrapped(Wrapped),
            Bare(Alert),
        }

        Ok(match Body::deserialize(deserializer)? {
            Body::Wrapped(w) => AlertDetail {
                alert: w.alert,
                evidence: w.evidence.unwrap_or_default(),
            },
            Body::Bare(alert) => AlertDetail {
                alert,
                evidence: Vec::new(),
            },
        })
    }
}
