//! hostlens-views: table and detail renderers for the dashboard pages.
//!
//! A response body goes in, plain text comes out:
//!
//! ```text
//! body ──► envelope::decode ──► records ──► pages::{table, detail} ──► Table / Detail
//!                                                │
//!                                                └──► timestamp policy per view
//! ```

pub mod context;
pub mod detail;
pub mod pages;
pub mod state;
pub mod table;

use std::fmt;
use std::str::FromStr;

use hostlens_core::envelope::{decode, decode_list, decode_optional};
use hostlens_core::{
    ActiveConnection, ActiveProcess, Alert, AlertDetail, EnvelopeError, LogEvent, MetricSnapshot,
    NetworkEvent, Payload, ProcessEvent, SystemStatus, ThreadHealth,
};

pub use context::{RenderContext, TimestampPolicy};
pub use detail::Detail;
pub use state::ViewState;
pub use table::Table;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(
        "unknown view {0:?} (expected one of: alerts, logs, network, processes, metrics, \
         status, threads, active-processes, connections, internal)"
    )]
    Unknown(String),

    #[error("the {0} view has no detail block")]
    NoDetail(View),
}

/// Dashboard pages and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Alerts,
    Logs,
    Network,
    Processes,
    Metrics,
    /// Host health cards.
    Status,
    /// Backend worker threads.
    Threads,
    /// Live process listing.
    ActiveProcesses,
    /// Live socket listing.
    Connections,
    /// The backend's own application log.
    InternalLog,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Alerts,
        View::Logs,
        View::Network,
        View::Processes,
        View::Metrics,
        View::Status,
        View::Threads,
        View::ActiveProcesses,
        View::Connections,
        View::InternalLog,
    ];

    /// Backend path of the list endpoint.
    pub fn list_endpoint(self) -> &'static str {
        match self {
            View::Alerts => "/api/alerts",
            View::Logs => "/api/logs/events",
            View::Network => "/api/network/events",
            View::Processes => "/api/process/events",
            View::Metrics => "/api/metrics/timeline",
            View::Status => "/api/system/status",
            View::Threads => "/api/system/threads",
            View::ActiveProcesses => "/api/process/active",
            View::Connections => "/api/network/active",
            View::InternalLog => "/api/logs/internal",
        }
    }

    /// Backend path of the single-record endpoint, if the page has a modal.
    /// The metrics page always shows the latest snapshot, so `id` is ignored.
    pub fn detail_endpoint(self, id: i64) -> Option<String> {
        match self {
            View::Alerts => Some(format!("/api/alerts/{id}")),
            View::Network => Some(format!("/api/network/events/{id}")),
            View::Processes => Some(format!("/api/process/events/{id}")),
            View::Metrics => Some("/api/metrics/latest".to_string()),
            View::Logs
            | View::Status
            | View::Threads
            | View::ActiveProcesses
            | View::Connections
            | View::InternalLog => None,
        }
    }

    /// Whether the list endpoint honours `?offset=`.
    pub fn paginated(self) -> bool {
        matches!(self, View::Alerts | View::Logs | View::Network | View::Processes)
    }

    /// Whether the list endpoint honours `?limit=`. Live snapshots always
    /// return everything.
    pub fn limited(self) -> bool {
        self.paginated() || self == View::Metrics
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Alerts => write!(f, "alerts"),
            View::Logs => write!(f, "logs"),
            View::Network => write!(f, "network"),
            View::Processes => write!(f, "processes"),
            View::Metrics => write!(f, "metrics"),
            View::Status => write!(f, "status"),
            View::Threads => write!(f, "threads"),
            View::ActiveProcesses => write!(f, "active-processes"),
            View::Connections => write!(f, "connections"),
            View::InternalLog => write!(f, "internal"),
        }
    }
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alerts" | "alert" => Ok(View::Alerts),
            "logs" | "log" => Ok(View::Logs),
            "network" | "net" => Ok(View::Network),
            "processes" | "process" | "proc" => Ok(View::Processes),
            "metrics" | "metric" => Ok(View::Metrics),
            "status" | "system" => Ok(View::Status),
            "threads" | "thread" => Ok(View::Threads),
            "active-processes" | "active" | "ps" => Ok(View::ActiveProcesses),
            "connections" | "conns" | "sockets" => Ok(View::Connections),
            "internal" | "internal-log" => Ok(View::InternalLog),
            _ => Err(ViewError::Unknown(s.to_string())),
        }
    }
}

/// Decode a list-endpoint body for `view` and lay it out as a table.
pub fn render_list(view: View, body: &[u8], ctx: &RenderContext) -> Result<Table, ViewError> {
    let table = match view {
        View::Alerts => pages::table(&decode_list::<Alert>(body)?, ctx),
        View::Logs => pages::table(&decode_list::<LogEvent>(body)?, ctx),
        View::Network => pages::table(&decode_list::<NetworkEvent>(body)?, ctx),
        View::Processes => pages::table(&decode_list::<ProcessEvent>(body)?, ctx),
        View::Metrics => pages::table(&decode_list::<MetricSnapshot>(body)?, ctx),
        View::Status => pages::system::status_table(&decode::<SystemStatus>(body)?, ctx),
        View::Threads => pages::table(&decode_list::<ThreadHealth>(body)?, ctx),
        View::ActiveProcesses => pages::table(&decode_list::<ActiveProcess>(body)?, ctx),
        View::Connections => pages::table(&decode_list::<ActiveConnection>(body)?, ctx),
        View::InternalLog => {
            let content = match decode_optional::<String>(body)? {
                Payload::Data(content) => content,
                Payload::Empty { .. } => String::new(),
            };
            pages::logs::internal_table(&content, ctx)
        }
    };
    tracing::debug!(%view, rows = table.len(), "rendered list");
    Ok(table)
}

/// Decode a single-record body for `view` and lay it out as a detail block.
pub fn render_detail(view: View, body: &[u8], ctx: &RenderContext) -> Result<Detail, ViewError> {
    let detail = match view {
        View::Alerts => pages::detail(&decode::<AlertDetail>(body)?, ctx),
        View::Network => pages::detail(&decode::<NetworkEvent>(body)?, ctx),
        View::Processes => pages::detail(&decode::<ProcessEvent>(body)?, ctx),
        View::Metrics => match decode_optional::<MetricSnapshot>(body)? {
            Payload::Data(snapshot) => pages::detail(&snapshot, ctx),
            Payload::Empty { message } => {
                tracing::warn!(message = ?message, "no metric snapshot recorded");
                pages::metrics::empty_detail(message)
            }
        },
        View::Logs => pages::detail(&decode::<LogEvent>(body)?, ctx),
        View::Status => pages::detail(&decode::<SystemStatus>(body)?, ctx),
        View::ActiveProcesses => pages::detail(&decode::<ActiveProcess>(body)?, ctx),
        View::Connections => pages::detail(&decode::<ActiveConnection>(body)?, ctx),
        View::Threads | View::InternalLog => return Err(ViewError::NoDetail(view)),
    };
    tracing::debug!(%view, title = %detail.title, "rendered detail");
    Ok(detail)
}
