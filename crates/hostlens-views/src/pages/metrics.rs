//! Metrics page: the latest host snapshot.

use hostlens_core::MetricSnapshot;

use super::{clip, Inspect, Row};
use crate::context::RenderContext;
use crate::detail::{Detail, Section, SectionEntry};
use crate::View;

impl Row for MetricSnapshot {
    const COLUMNS: &'static [&'static str] = &["Time", "Snapshot"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            ctx.timestamp(View::Metrics, self.timestamp.as_deref()),
            clip(self.snapshot.to_string(), ctx.message_width),
        ]
    }
}

impl Inspect for MetricSnapshot {
    fn title(&self) -> String {
        format!("Metric snapshot #{}", self.id)
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        vec![("Time", ctx.timestamp(View::Metrics, self.timestamp.as_deref()))]
    }

    fn sections(&self) -> Vec<Section> {
        let body = serde_json::to_string_pretty(&self.snapshot)
            .unwrap_or_else(|_| self.snapshot.to_string());
        vec![Section {
            title: "Snapshot".to_string(),
            entries: vec![SectionEntry {
                heading: "values".to_string(),
                body,
            }],
        }]
    }
}

/// Detail block for a `latest` request made before any snapshot exists.
pub fn empty_detail(message: Option<String>) -> Detail {
    Detail {
        title: "(no snapshot)".to_string(),
        fields: message.map(|m| vec![("Message", m)]).unwrap_or_default(),
        sections: Vec::new(),
    }
}
