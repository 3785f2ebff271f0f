//! Timestamp normalization and display formatting.
//!
//! The backend serializes datetimes as ISO-8601-like strings, frequently with
//! microsecond precision and often without a zone marker
//! (`2024-03-15T12:30:45.123456`). [`format_timestamp`] truncates the fraction
//! to milliseconds, parses the result into a UTC instant and renders it as
//! `dd.mm.yyyy, HH:MM:SS`.
//!
//! Formatting never fails. Absent or empty input yields [`SENTINEL`]; input
//! that does not parse is handed back exactly as received so operators still
//! see the original text.
//!
//! # Accepted shapes
//!
//! | Shape | Example |
//! |-------|---------|
//! | RFC 3339 | `2024-03-15T12:30:45.123Z`, `2024-03-15T15:30:45+03:00` |
//! | compact offset | `2024-03-15T15:30:45+0300` |
//! | zone-less (read as UTC) | `2024-03-15T12:30:45`, `2024-03-15 12:30:45.5` |
//! | no seconds | `2024-03-15T12:30` |
//! | date only | `2024-03-15` |

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SubsecRound, Utc};
use regex::Regex;

/// Placeholder rendered when there is no timestamp at all.
pub const SENTINEL: &str = "-";

/// `chrono` format string for rendered timestamps.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

// ASCII digits only: `\d` would also match non-ASCII decimal digits.
static FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([0-9]{3})[0-9]+").expect("fraction pattern must compile"));

const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a raw backend timestamp for display, in UTC.
///
/// Returns [`SENTINEL`] for `None` or `""`, the untouched `raw` string when it
/// cannot be parsed, and `dd.mm.yyyy, HH:MM:SS` otherwise.
///
/// ```
/// use hostlens_core::timestamp::format_timestamp;
///
/// assert_eq!(format_timestamp(Some("2024-03-15T12:30:45.123456Z")), "15.03.2024, 12:30:45");
/// assert_eq!(format_timestamp(Some("not-a-timestamp")), "not-a-timestamp");
/// assert_eq!(format_timestamp(None), "-");
/// ```
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_with(raw, &Utc.fix())
}

/// Like [`format_timestamp`], but renders the instant shifted to `zone`.
///
/// Parsing is shared with the core formatter, so fraction truncation and the
/// echo-on-failure rule apply unchanged. Only the rendered wall clock moves.
pub fn format_instant_in_zone(raw: Option<&str>, zone: FixedOffset) -> String {
    format_with(raw, &zone)
}

/// Build a display zone from an offset east of UTC, in minutes.
///
/// Returns `None` when the offset is a full day or more in either direction.
pub fn zone_from_offset_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

/// Truncate the first run of more than three fractional-second digits to
/// exactly three. Purely textual: nothing is rounded, and strings without such
/// a run are borrowed back unchanged.
pub fn normalize_fraction(raw: &str) -> Cow<'_, str> {
    FRACTION_RE.replace(raw, ".$1")
}

/// Parse a raw timestamp into a millisecond-precision UTC instant.
///
/// Zone-less strings are read as UTC. Surrounding whitespace is ignored.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let normalized = normalize_fraction(raw);
    parse_normalized(normalized.trim()).map(|instant| instant.trunc_subsecs(3))
}

/// Render an instant in `zone` using [`DISPLAY_FORMAT`].
pub fn render_instant(instant: DateTime<Utc>, zone: &FixedOffset) -> String {
    instant.with_timezone(zone).format(DISPLAY_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn format_with(raw: Option<&str>, zone: &FixedOffset) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return SENTINEL.to_string();
    };

    match parse_instant(raw) {
        Some(instant) => render_instant(instant, zone),
        None => raw.to_string(),
    }
}

fn parse_normalized(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
