//! System panels: host health cards and backend worker threads.

use hostlens_core::{SystemStatus, ThreadHealth, SENTINEL};
use serde_json::Value;

use super::{json_section, number, percent, text, Inspect, Row};
use crate::context::RenderContext;
use crate::detail::Section;
use crate::table::Table;
use crate::View;

/// The status cards as a two-column table.
pub fn status_table(status: &SystemStatus, ctx: &RenderContext) -> Table {
    let mut table = Table::new(&["Metric", "Value"]).show_header(ctx.show_header);
    for (label, value) in status_lines(status) {
        table.push(vec![label.to_string(), value]);
    }
    table
}

fn status_lines(status: &SystemStatus) -> Vec<(&'static str, String)> {
    vec![
        ("CPU", percent(status.cpu_percent)),
        ("Memory", memory(status)),
        ("Uptime", system_uptime(status)),
        ("HIDS uptime", number(status.hids_uptime_seconds.map(uptime))),
        ("Processes", number(status.process_count)),
        ("Scheduler", scheduler_summary(&status.scheduler_threads)),
    ]
}

impl Inspect for SystemStatus {
    fn title(&self) -> String {
        "System status".to_string()
    }

    fn fields(&self, _ctx: &RenderContext) -> Vec<(&'static str, String)> {
        status_lines(self)
    }

    fn sections(&self) -> Vec<Section> {
        json_section("Scheduler threads", &self.scheduler_threads)
            .into_iter()
            .collect()
    }
}

impl Row for ThreadHealth {
    const COLUMNS: &'static [&'static str] = &["Thread", "State", "Last heartbeat"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            text(Some(self.name.as_str())),
            thread_state(self.alive).to_string(),
            ctx.timestamp(View::Threads, self.last_heartbeat.as_deref()),
        ]
    }
}

fn thread_state(alive: bool) -> &'static str {
    if alive {
        "Alive"
    } else {
        "Dead"
    }
}

fn memory(status: &SystemStatus) -> String {
    let pct = percent(status.memory_percent);
    match (status.memory_used_mb, status.memory_total_mb) {
        (Some(used), Some(total)) => format!("{pct} ({used:.0} / {total:.0} MB)"),
        _ => pct,
    }
}

fn system_uptime(status: &SystemStatus) -> String {
    match status.system_uptime_human.as_deref() {
        Some(human) if !human.is_empty() => human.to_string(),
        _ => number(status.system_uptime_seconds.map(uptime)),
    }
}

/// `3d 4h 12m`, `4h 12m` or `12m 5s`, depending on magnitude.
fn uptime(secs: u64) -> String {
    let (days, hours, mins, secs) = (secs / 86_400, secs / 3_600 % 24, secs / 60 % 60, secs % 60);
    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m {secs}s")
    }
}

/// `3/4 alive` for a thread map, or the scheduler's own error text.
fn scheduler_summary(threads: &Value) -> String {
    let Some(map) = threads.as_object() else {
        return SENTINEL.to_string();
    };
    if let Some(reason) = ["error", "exception"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
    {
        return reason.to_string();
    }
    let alive = map.values().filter(|v| v.as_bool() == Some(true)).count();
    format!("{alive}/{} alive", map.len())
}
