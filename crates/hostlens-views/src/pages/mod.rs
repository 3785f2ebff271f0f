//! One module per dashboard page.
//!
//! A page knows its table columns ([`Row`]) and the fields its detail modal
//! lists ([`Inspect`]). Both go through [`RenderContext::timestamp`] so the
//! view's timestamp policy is applied in one place.

pub mod alerts;
pub mod logs;
pub mod metrics;
pub mod network;
pub mod processes;
pub mod system;

use std::fmt::Display;

use hostlens_core::SENTINEL;

use crate::context::RenderContext;
use crate::detail::{Detail, Section, SectionEntry};
use crate::table::Table;

/// A record that renders as one table row.
pub trait Row {
    const COLUMNS: &'static [&'static str];

    fn cells(&self, ctx: &RenderContext) -> Vec<String>;
}

/// A record that renders as a detail block.
pub trait Inspect {
    fn title(&self) -> String;

    fn fields(&self, ctx: &RenderContext) -> Vec<(&'static str, String)>;

    fn sections(&self) -> Vec<Section> {
        Vec::new()
    }
}

pub fn table<R: Row>(records: &[R], ctx: &RenderContext) -> Table {
    let mut table = Table::new(R::COLUMNS).show_header(ctx.show_header);
    for record in records {
        table.push(record.cells(ctx));
    }
    table
}

pub fn detail<I: Inspect>(record: &I, ctx: &RenderContext) -> Detail {
    Detail {
        title: record.title(),
        fields: record.fields(ctx),
        sections: record.sections(),
    }
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

/// Text cell: sentinel when absent or empty, control whitespace flattened so
/// a cell never breaks the line.
pub(crate) fn text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect(),
        _ => SENTINEL.to_string(),
    }
}

pub(crate) fn number<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| SENTINEL.to_string(), |v| v.to_string())
}

/// Cut to at most `width` chars, marking the cut with `…`.
pub(crate) fn clip(value: String, width: usize) -> String {
    if value.chars().count() <= width {
        return value;
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Percentage with one decimal, as the dashboard cards show it.
pub(crate) fn percent(value: Option<f64>) -> String {
    number(value.map(|v| format!("{v:.1}%")))
}

/// Compact JSON, or the sentinel for `null`.
pub(crate) fn json_cell(value: &serde_json::Value) -> String {
    if value.is_null() {
        SENTINEL.to_string()
    } else {
        value.to_string()
    }
}

/// A section holding one pretty-printed JSON document. `None` for `null`.
pub(crate) fn json_section(title: &str, value: &serde_json::Value) -> Option<Section> {
    if value.is_null() {
        return None;
    }
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    Some(Section {
        title: title.to_string(),
        entries: vec![SectionEntry {
            heading: String::new(),
            body,
        }],
    })
}

/// `ip:port`, or the sentinel when the address is unknown.
pub(crate) fn endpoint(ip: Option<&str>, port: Option<u16>) -> String {
    match (ip, port) {
        (Some(ip), Some(port)) if !ip.is_empty() => format!("{ip}:{port}"),
        (Some(ip), None) if !ip.is_empty() => ip.to_string(),
        _ => SENTINEL.to_string(),
    }
}
