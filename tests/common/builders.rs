//! Test builders: ergonomic constructors for records and envelope bodies.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use hostlens_core::{Alert, LogEvent};

// ---------------------------------------------------------------------------
// AlertBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Alert`] fixtures.
///
/// ```rust
/// let alert = AlertBuilder::new(1)
///     .timestamp("2024-03-15T12:30:45.123456")
///     .rule("SSH_BRUTEFORCE")
///     .severity("HIGH")
///     .build();
/// ```
pub struct AlertBuilder {
    alert: Alert,
}

impl AlertBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            alert: Alert {
                id,
                ..Default::default()
            },
        }
    }

    pub fn timestamp(mut self, ts: impl Into<String>) -> Self {
        self.alert.timestamp = Some(ts.into());
        self
    }

    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.alert.rule_name = Some(rule.into());
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.alert.severity = Some(severity.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.alert.message = Some(message.into());
        self
    }

    pub fn build(self) -> Alert {
        self.alert
    }
}

// ---------------------------------------------------------------------------
// LogEventBuilder
// ---------------------------------------------------------------------------

pub struct LogEventBuilder {
    event: LogEvent,
}

impl LogEventBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            event: LogEvent {
                id,
                ..Default::default()
            },
        }
    }

    pub fn timestamp(mut self, ts: impl Into<String>) -> Self {
        self.event.timestamp = Some(ts.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event.event_type = Some(event_type.into());
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.event.severity = Some(severity.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.event.message = Some(message.into());
        self
    }

    pub fn build(self) -> LogEvent {
        self.event
    }
}

// ---------------------------------------------------------------------------
// Envelope bodies
// ---------------------------------------------------------------------------

/// Wrap serializable records in a success envelope, as the backend would.
pub fn success_body<T: serde::Serialize>(data: &T) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "status": "success",
        "success": true,
        "message": "OK",
        "data": data,
    }))
    .expect("test records must serialize")
}
