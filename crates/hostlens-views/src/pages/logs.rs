//! Logs page: parsed system log events and the backend's own log.

use hostlens_core::LogEvent;

use super::{clip, text, Inspect, Row};
use crate::context::RenderContext;
use crate::table::Table;
use crate::View;

/// Only the tail of the internal log is shown.
pub const INTERNAL_LOG_TAIL_CHARS: usize = 20_000;

impl Row for LogEvent {
    const COLUMNS: &'static [&'static str] = &["Time", "Type", "Severity", "Message"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            ctx.timestamp(View::Logs, self.timestamp.as_deref()),
            text(self.event_type.as_deref()),
            text(self.severity.as_deref()),
            clip(text(self.message.as_deref()), ctx.message_width),
        ]
    }
}

impl Inspect for LogEvent {
    fn title(&self) -> String {
        format!("Log event #{}", self.id)
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        vec![
            ("Time", ctx.timestamp(View::Logs, self.timestamp.as_deref())),
            ("Source", text(self.log_source.as_deref())),
            ("Type", text(self.event_type.as_deref())),
            ("Category", text(self.category.as_deref())),
            ("Severity", text(self.severity.as_deref())),
            ("Message", text(self.message.as_deref())),
            ("User", text(self.user.as_deref())),
            ("IP", text(self.ip_address.as_deref())),
            ("Process", text(self.process_name.as_deref())),
            ("Rule", text(self.rule_triggered.as_deref())),
            ("Raw", text(self.raw_log.as_deref())),
        ]
    }
}

/// Lay out the internal application log, one line per row. Content beyond
/// [`INTERNAL_LOG_TAIL_CHARS`] is dropped from the front, along with the
/// partial line the cut leaves behind.
pub fn internal_table(content: &str, ctx: &RenderContext) -> Table {
    let start = content
        .char_indices()
        .rev()
        .nth(INTERNAL_LOG_TAIL_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let mut tail = &content[start..];
    if start > 0 && !content[..start].ends_with('\n') {
        tail = tail.split_once('\n').map_or("", |(_, rest)| rest);
    }

    let mut table = Table::new(&["Log"]).show_header(ctx.show_header);
    for line in tail.lines().filter(|l| !l.trim().is_empty()) {
        table.push(vec![text(Some(line.trim_end()))]);
    }
    table
}
