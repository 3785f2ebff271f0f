//! Alerts page: alert list and the alert modal with its evidence.

use hostlens_core::{Alert, AlertDetail};

use super::{clip, number, text, Inspect, Row};
use crate::context::RenderContext;
use crate::detail::{Section, SectionEntry};
use crate::View;

impl Row for Alert {
    const COLUMNS: &'static [&'static str] = &["ID", "Time", "Rule", "Severity", "Message"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            self.id.to_string(),
            ctx.timestamp(View::Alerts, self.timestamp.as_deref()),
            text(self.rule_name.as_deref()),
            text(self.severity.as_deref()),
            clip(text(self.message.as_deref()), ctx.message_width),
        ]
    }
}

impl Inspect for AlertDetail {
    fn title(&self) -> String {
        self.alert
            .rule_name
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| format!("Alert #{}", self.alert.id))
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        let alert = &self.alert;
        vec![
            ("ID", alert.id.to_string()),
            ("Severity", text(alert.severity.as_deref())),
            ("Time", ctx.timestamp(View::Alerts, alert.timestamp.as_deref())),
            ("Message", text(alert.message.as_deref())),
            ("Log event", number(alert.log_event_id)),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        let entries = self
            .evidence
            .iter()
            .map(|ev| SectionEntry {
                heading: format!("{} {}", ev.role, ev.event_type),
                body: serde_json::to_string_pretty(&ev.event).unwrap_or_else(|_| ev.event.to_string()),
            })
            .collect();
        vec![Section {
            title: "Related Events".to_string(),
            entries,
        }]
    }
}
