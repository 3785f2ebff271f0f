//! Subcommand bodies, separated from argument parsing in `main.rs`.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::FixedOffset;
use hostlens_core::config::Config;
use hostlens_core::timestamp::{format_instant_in_zone, format_timestamp, zone_from_offset_minutes};
use hostlens_views::{render_detail, render_list, RenderContext, View, ViewState};

/// Resolve `--offset-minutes` into a zone, rejecting impossible offsets.
pub fn zone_arg(offset_minutes: Option<i32>) -> anyhow::Result<Option<FixedOffset>> {
    offset_minutes
        .map(|m| {
            zone_from_offset_minutes(m)
                .with_context(|| format!("--offset-minutes {m} is outside ±24h"))
        })
        .transpose()
}

fn format_one(raw: &str, zone: Option<FixedOffset>) -> String {
    match zone {
        Some(zone) => format_instant_in_zone(Some(raw), zone),
        None => format_timestamp(Some(raw)),
    }
}

/// `hostlens fmt`: one formatted timestamp per argument.
pub fn fmt_args(
    timestamps: &[String],
    zone: Option<FixedOffset>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for raw in timestamps {
        writeln!(out, "{}", format_one(raw, zone))?;
    }
    Ok(())
}

/// `hostlens fmt` with no arguments: one formatted timestamp per input line.
/// Line terminators are stripped; an empty line prints the sentinel.
pub fn fmt_lines(
    input: impl BufRead,
    zone: Option<FixedOffset>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading timestamps from input")?;
        let raw = line.strip_suffix('\r').unwrap_or(&line);
        writeln!(out, "{}", format_one(raw, zone))?;
    }
    Ok(())
}

/// `hostlens render`: list response to table.
pub fn render(view: View, body: &[u8], ctx: &RenderContext, out: &mut impl Write) -> anyhow::Result<()> {
    let table = render_list(view, body, ctx)
        .inspect_err(|e| tracing::warn!(%view, error = %e, "list response rejected"))
        .with_context(|| format!("rendering {view} list"))?;
    table.render(out)?;
    Ok(())
}

/// `hostlens detail`: single-record response to detail block.
pub fn detail(view: View, body: &[u8], ctx: &RenderContext, out: &mut impl Write) -> anyhow::Result<()> {
    let detail = render_detail(view, body, ctx)
        .inspect_err(|e| tracing::warn!(%view, error = %e, "detail response rejected"))
        .with_context(|| format!("rendering {view} detail"))?;
    detail.render(out)?;
    Ok(())
}

/// `hostlens endpoint`: the API path to fetch for a page or a record.
pub fn endpoint(view: View, page: usize, id: Option<i64>, config: &Config) -> anyhow::Result<String> {
    let limit = match view {
        View::Logs => config.api.logs_limit,
        _ => config.api.events_limit,
    };
    let mut state = ViewState::new(view, limit);
    for _ in 0..page {
        if !state.next_page(limit) {
            anyhow::bail!("the {view} list is not paginated");
        }
    }
    match id {
        Some(id) => {
            state.select(id);
            state
                .detail_path()
                .with_context(|| format!("the {view} view has no detail endpoint"))
        }
        None => Ok(state.list_path()),
    }
}

/// Build the render context from config, with an optional alert-zone override.
pub fn render_context(config: &Config, zone: Option<FixedOffset>) -> anyhow::Result<RenderContext> {
    let ctx = RenderContext::from_config(config).context("invalid display config")?;
    Ok(match zone {
        Some(zone) => ctx.with_alert_zone(zone),
        None => ctx,
    })
}
