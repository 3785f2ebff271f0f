//! Configuration types for hostlens.
//!
//! [`Config::load`] reads `~/.config/hostlens/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers an
//! explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::timestamp::zone_from_offset_minutes;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[display]
alert_offset_minutes = 180
message_width        = 60
show_header          = true

[api]
logs_limit   = 50
events_limit = 20
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("display.alert_offset_minutes = {0} is outside ±24h")]
    OffsetOutOfRange(i32),

    #[error("display.message_width must be at least 1")]
    ZeroMessageWidth,
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/hostlens/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Offset east of UTC applied to alert timestamps, in minutes.
    #[serde(default = "default_alert_offset_minutes")]
    pub alert_offset_minutes: i32,
    /// Message cells longer than this many chars are cut with `…`.
    #[serde(default = "default_message_width")]
    pub message_width: usize,
    #[serde(default = "default_show_header")]
    pub show_header: bool,
}

fn default_alert_offset_minutes() -> i32 { 180 }
fn default_message_width() -> usize { 60 }
fn default_show_header() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alert_offset_minutes: default_alert_offset_minutes(),
            message_width: default_message_width(),
            show_header: default_show_header(),
        }
    }
}

impl DisplayConfig {
    /// Display zone for the alerts view.
    pub fn alert_zone(&self) -> Result<FixedOffset, ConfigError> {
        zone_from_offset_minutes(self.alert_offset_minutes)
            .ok_or(ConfigError::OffsetOutOfRange(self.alert_offset_minutes))
    }
}

/// `[api]` section of `config.toml`. Row limits mirror the query strings the
/// dashboard pages send (`?limit=50` for the log page, `?limit=20` for the
/// overview).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_logs_limit")]
    pub logs_limit: usize,
    #[serde(default = "default_events_limit")]
    pub events_limit: usize,
}

fn default_logs_limit() -> usize { 50 }
fn default_events_limit() -> usize { 20 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            logs_limit: default_logs_limit(),
            events_limit: default_events_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/hostlens/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer `path` on top of the built-in defaults. A missing file is not an
    /// error; the defaults are returned as-is.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject values the views cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.alert_zone()?;
        if self.display.message_width == 0 {
            return Err(ConfigError::ZeroMessageWidth);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("hostlens")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
