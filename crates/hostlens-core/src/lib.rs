//! hostlens-core: shared pieces of the hostlens viewer.
//!
//! The interesting part is [`timestamp`]: raw backend timestamps are
//! normalized to millisecond precision and rendered as
//! `dd.mm.yyyy, HH:MM:SS`. The remaining modules describe what the backend
//! sends ([`envelope`], [`types`]) and how the viewer is configured
//! ([`config`]).

pub mod config;
pub mod envelope;
pub mod timestamp;
pub mod types;

pub use envelope::{ApiEnvelope, EnvelopeError, Payload};
pub use timestamp::{format_instant_in_zone, format_timestamp, SENTINEL};
pub use types::{
    ActiveConnection, ActiveProcess, Alert, AlertDetail, Evidence, LogEvent, MetricSnapshot,
    NetworkEvent, ProcessEvent, SystemStatus, ThreadHealth,
};
