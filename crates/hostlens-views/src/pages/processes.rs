//! Processes page: process lifecycle events and the live process listing.

use chrono::{DateTime, Offset, Utc};
use hostlens_core::timestamp::render_instant;
use hostlens_core::{ActiveProcess, ProcessEvent, SENTINEL};

use super::{clip, json_section, number, percent, text, Inspect, Row};
use crate::context::RenderContext;
use crate::detail::Section;
use crate::View;

impl Row for ProcessEvent {
    const COLUMNS: &'static [&'static str] = &["Time", "Type", "PID", "Process"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            ctx.timestamp(View::Processes, self.timestamp.as_deref()),
            text(self.event_type.as_deref()),
            number(self.pid),
            text(self.process_name.as_deref()),
        ]
    }
}

impl Inspect for ProcessEvent {
    fn title(&self) -> String {
        format!("Process event #{}", self.id)
    }

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)> {
        vec![
            ("Time", ctx.timestamp(View::Processes, self.timestamp.as_deref())),
            ("Type", text(self.event_type.as_deref())),
            ("PID", number(self.pid)),
            ("PPID", number(self.ppid)),
            ("Process", text(self.process_name.as_deref())),
            ("Executable", text(self.exe.as_deref())),
            ("Command", text(self.cmdline.as_deref())),
            ("User", text(self.username.as_deref())),
            ("Started", started(self.create_time)),
            ("CPU", percent(self.cpu_percent)),
            ("RSS", number(self.memory_rss.map(mebibytes))),
            ("VMS", number(self.memory_vms.map(mebibytes))),
            ("Old value", text(self.old_value.as_deref())),
            ("New value", text(self.new_value.as_deref())),
            ("Executable deleted", number(self.exe_deleted.map(yes_no))),
            ("Alert", number(self.alert_id)),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        // Both columns hold the collector's event; show whichever survived.
        let raw = if self.raw_event.is_null() {
            &self.snapshot_data
        } else {
            &self.raw_event
        };
        json_section("Raw event", raw).into_iter().collect()
    }
}

impl Row for ActiveProcess {
    const COLUMNS: &'static [&'static str] = &["PID", "Name", "User", "CPU", "Mem", "Command"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            self.pid.to_string(),
            text(self.name.as_deref()),
            text(self.username.as_deref()),
            number(self.cpu.map(|c| format!("{c:.1}"))),
            number(self.mem.map(|m| format!("{m:.1}"))),
            clip(text(self.cmdline.as_deref()), ctx.message_width),
        ]
    }
}

impl Inspect for ActiveProcess {
    fn title(&self) -> String {
        format!("Process {}", self.pid)
    }

    fn fields(&self, _ctx: &RenderContext) -> Vec<(&'static str, String)> {
        vec![
            ("PID", self.pid.to_string()),
            ("Name", text(self.name.as_deref())),
            ("User", text(self.username.as_deref())),
            ("CPU", percent(self.cpu)),
            ("Memory", percent(self.mem)),
            ("Command", text(self.cmdline.as_deref())),
        ]
    }
}

fn mebibytes(bytes: u64) -> String {
    format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "yes" } else { "no" };
    answer.to_string()
}

/// Epoch seconds rendered like every other timestamp, in UTC.
fn started(create_time: Option<f64>) -> String {
    create_time
        .filter(|t| t.is_finite())
        .and_then(|t| DateTime::<Utc>::from_timestamp_millis((t * 1000.0) as i64))
        .map_or_else(|| SENTINEL.to_string(), |at| render_instant(at, &Utc.fix()))
}
