//! Charge-time formatting — clock-style and human-phrase renditions of a
//! cumulative number of seconds.

use crate::attribute::{AttributeMap, AttributeValue};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 60 * 60 * 24;
const SECS_PER_MONTH: u64 = SECS_PER_DAY * 30;
const SECS_PER_YEAR: u64 = SECS_PER_DAY * 365;

/// A duration derived from raw seconds, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDuration {
    /// The untouched input.
    pub raw: u64,
    /// Clock style, e.g. `"2 days, 0:45:45"`.
    pub formatted: String,
    /// Human phrase, e.g. `"2 hours, 45 minutes, 45 seconds"`.
    pub long: String,
}

impl FormattedDuration {
    /// Flat attribute map for auxiliary display: `raw`, `formatted`, `long`.
    #[must_use]
    pub fn attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert(
            "raw".to_string(),
            AttributeValue::Int(i64::try_from(self.raw).unwrap_or(i64::MAX)),
        );
        attrs.insert(
            "formatted".to_string(),
            AttributeValue::String(self.formatted.clone()),
        );
        attrs.insert("long".to_string(), AttributeValue::String(self.long.clone()));
        attrs
    }
}

/// Derive both display forms from a cumulative number of seconds.
#[must_use]
pub fn format_duration(seconds: u64) -> FormattedDuration {
    FormattedDuration {
        raw: seconds,
        formatted: clock_format(seconds),
        long: long_format(seconds),
    }
}

/// `H:MM:SS` with unpadded hours, prefixed with whole days when present.
fn clock_format(seconds: u64) -> String {
    let days = seconds / SECS_PER_DAY;
    let rem = seconds % SECS_PER_DAY;
    let hours = rem / SECS_PER_HOUR;
    let minutes = (rem % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = rem % SECS_PER_MINUTE;

    let clock = format!("{hours}:{minutes:02}:{secs:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Greedy largest-unit-first phrase: `"2 years, 1 month, 8 days"`.
///
/// Only non-zero components appear. A trailing remainder of exactly one
/// second is dropped unless it is the only component, so 61 seconds reads
/// `"1 minute"` while 45-second remainders are kept.
fn long_format(seconds: u64) -> String {
    const UNITS: [(&str, u64); 5] = [
        ("year", SECS_PER_YEAR),
        ("month", SECS_PER_MONTH),
        ("day", SECS_PER_DAY),
        ("hour", SECS_PER_HOUR),
        ("minute", SECS_PER_MINUTE),
    ];

    let mut parts = Vec::new();
    let mut rem = seconds;
    for (unit, div) in UNITS {
        let amount = rem / div;
        rem %= div;
        if amount > 0 {
            parts.push(pluralize(amount, unit));
        }
    }

    if rem > 1 || (rem == 1 && parts.is_empty()) {
        parts.push(pluralize(rem, "second"));
    }

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(", ")
    }
}

fn pluralize(amount: u64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}
