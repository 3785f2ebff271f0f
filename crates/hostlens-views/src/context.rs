//! Render context: the display settings every page reads.

use chrono::{FixedOffset, Offset, Utc};
use hostlens_core::config::{Config, ConfigError};
use hostlens_core::timestamp::{format_instant_in_zone, format_timestamp};

use crate::View;

/// How a view turns raw timestamps into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// The core formatter, rendered in UTC.
    Utc,
    /// The fixed-offset wrapper.
    Zoned(FixedOffset),
}

impl TimestampPolicy {
    pub fn apply(&self, raw: Option<&str>) -> String {
        match self {
            TimestampPolicy::Utc => format_timestamp(raw),
            TimestampPolicy::Zoned(zone) => format_instant_in_zone(raw, *zone),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub alert_zone: FixedOffset,
    pub message_width: usize,
    pub show_header: bool,
}

impl RenderContext {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            alert_zone: config.display.alert_zone()?,
            message_width: config.display.message_width,
            show_header: config.display.show_header,
        })
    }

    /// Override the alert zone, e.g. from a command-line flag.
    pub fn with_alert_zone(mut self, zone: FixedOffset) -> Self {
        self.alert_zone = zone;
        self
    }

    /// Only the alerts view shifts timestamps; every other view uses the core
    /// formatter as-is.
    pub fn policy(&self, view: View) -> TimestampPolicy {
        match view {
            View::Alerts => TimestampPolicy::Zoned(self.alert_zone),
            View::Logs
            | View::Network
            | View::Processes
            | View::Metrics
            | View::Status
            | View::Threads
            | View::ActiveProcesses
            | View::Connections
            | View::InternalLog => TimestampPolicy::Utc,
        }
    }

    pub fn timestamp(&self, view: View, raw: Option<&str>) -> String {
        self.policy(view).apply(raw)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        let display = hostlens_core::config::DisplayConfig::default();
        Self {
            alert_zone: display.alert_zone().unwrap_or(Utc.fix()),
            message_width: display.message_width,
            show_header: display.show_header,
        }
    }
}
