use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use hostlens::commands;
use hostlens_core::config::Config;
use hostlens_views::View;

#[derive(Parser)]
#[command(name = "hostlens", about = "hostlens: render host-monitoring API responses in the terminal")]
struct Cli {
    /// Write debug logs to hostlens-debug.log in the temp dir (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/hostlens/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format raw timestamps given as arguments, or one per stdin line.
    Fmt {
        timestamps: Vec<String>,
        /// Render in this fixed offset from UTC instead of UTC itself.
        #[arg(long, allow_hyphen_values = true)]
        offset_minutes: Option<i32>,
    },
    /// Render a list response: an event page, a metrics timeline or a live
    /// panel (status, threads, active-processes, connections, internal).
    Render {
        view: View,
        /// Read the response from a file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Override the configured alert offset.
        #[arg(long, allow_hyphen_values = true)]
        offset_minutes: Option<i32>,
    },
    /// Render a single-record response as a detail block.
    Detail {
        view: View,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        offset_minutes: Option<i32>,
    },
    /// Print the API path serving a view's list page or one of its records.
    Endpoint {
        view: View,
        /// Zero-based page number.
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Record id, for the detail endpoint.
        #[arg(long)]
        id: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("hostlens-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("hostlens debug log started; tail -f {}", path.display());
    }

    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Fmt { timestamps, offset_minutes } => {
            let zone = commands::zone_arg(offset_minutes)?;
            if timestamps.is_empty() {
                commands::fmt_lines(io::stdin().lock(), zone, &mut out)?;
            } else {
                commands::fmt_args(&timestamps, zone, &mut out)?;
            }
        }
        Command::Render { view, file, offset_minutes } => {
            let ctx = commands::render_context(&config, commands::zone_arg(offset_minutes)?)?;
            let body = read_body(file.as_deref())?;
            commands::render(view, &body, &ctx, &mut out)?;
        }
        Command::Detail { view, file, offset_minutes } => {
            let ctx = commands::render_context(&config, commands::zone_arg(offset_minutes)?)?;
            let body = read_body(file.as_deref())?;
            commands::detail(view, &body, &ctx, &mut out)?;
        }
        Command::Endpoint { view, page, id } => {
            writeln!(out, "{}", commands::endpoint(view, page, id, &config)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to built-in config");
            Config::defaults()
        })),
    }
}

fn read_body(file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut body = Vec::new();
            io::stdin().read_to_end(&mut body).context("reading response from stdin")?;
            Ok(body)
        }
    }
}
