//! Decoding of axis labels and mark data attributes into comparable numbers.
//!
//! Both tick labels and mark attributes are normalized into the same numeric
//! domain for a given [`ValueKind`]. Decoding never fails loudly: a value that
//! cannot be decoded yields `None` and the caller decides whether the owning
//! tick or mark is skipped or counted against the verdict.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::core::types::ValueKind;

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Formats accepted by [`parse_calendar`] besides RFC 3339.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// `Date.prototype.toString` shape once the trailing zone name is removed.
const JS_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Decodes a rendered tick label.
#[must_use]
pub fn decode_label(raw: &str, kind: ValueKind) -> Option<f64> {
    let raw = normalize_minus(raw.trim());
    match kind {
        ValueKind::Integer => parse_integer(&raw),
        ValueKind::ThousandsFormattedInteger => parse_integer(&raw.replace(',', "")),
        ValueKind::ClockMinutes => parse_clock_minutes(&raw),
        ValueKind::MonthName => month_index(&raw).map(f64::from),
    }
}

/// Decodes a mark data attribute.
///
/// Accepts everything [`decode_label`] accepts, plus the encodings pages use
/// interchangeably for the same quantity: an integer month (`0`-`11`) for
/// [`ValueKind::MonthName`], and a calendar date/time string from which the
/// year, month or minutes+seconds are taken.
#[must_use]
pub fn decode_mark_value(raw: &str, kind: ValueKind) -> Option<f64> {
    if let Some(value) = decode_label(raw, kind) {
        return Some(value);
    }

    let trimmed = raw.trim();
    if kind == ValueKind::MonthName {
        if let Some(month) = parse_integer(trimmed).filter(|month| (0.0..=11.0).contains(month)) {
            return Some(month);
        }
    }

    let parsed = parse_calendar(trimmed)?;
    match kind {
        ValueKind::Integer => Some(f64::from(parsed.year())),
        ValueKind::ClockMinutes => {
            Some(f64::from(parsed.minute()) + f64::from(parsed.second()) / 60.0)
        }
        ValueKind::MonthName => Some(f64::from(parsed.month0())),
        ValueKind::ThousandsFormattedInteger => None,
    }
}

/// Case-insensitive month lookup returning the 0-based month index.
///
/// Matches a full month name, or a label whose first three characters are
/// those of a month name (`"Mar"`, `"Sept"`, `"Jan."`, `"Sep 2015"`).
/// Anything else is `None`, never a valid index.
#[must_use]
pub fn month_index(label: &str) -> Option<u32> {
    let lowered = label.trim().to_lowercase();
    let abbreviation: String = lowered.chars().take(3).collect();
    if abbreviation.chars().count() < 3 {
        return None;
    }

    MONTH_NAMES
        .iter()
        .position(|name| *name == lowered || name.starts_with(abbreviation.as_str()))
        .and_then(|index| u32::try_from(index).ok())
}

/// Parses `MM:SS` into fractional minutes. The colon is required.
#[must_use]
pub fn parse_clock_minutes(raw: &str) -> Option<f64> {
    let (minutes, seconds) = raw.trim().split_once(':')?;
    if seconds.contains(':') {
        return None;
    }

    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    Some(f64::from(minutes) + f64::from(seconds) / 60.0)
}

/// Parses a base-10 integer, returning it as `f64`.
#[must_use]
pub fn parse_integer(raw: &str) -> Option<f64> {
    raw.trim().parse::<i64>().ok().map(|value| value as f64)
}

/// Parses a calendar date or date-time into its wall-clock fields.
///
/// The offset of zoned inputs is kept as written, so a JavaScript date
/// rendered in the page's local zone reports the same minutes and seconds
/// the page displayed.
#[must_use]
pub fn parse_calendar(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    let without_zone_name = raw.split(" (").next().unwrap_or(raw);
    DateTime::parse_from_str(without_zone_name, JS_DATE_FORMAT)
        .ok()
        .map(|parsed| parsed.naive_local())
}

// D3 formats negative ticks with U+2212 MINUS SIGN.
fn normalize_minus(raw: &str) -> String {
    raw.replace('\u{2212}', "-")
}
