use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::core::ticks::{self, DEFAULT_TICK_COUNT};
use crate::core::Domain;

/// Fixed-precision formatter for value labels, with thousands grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLabelFormat {
    precision: usize,
}

impl ValueLabelFormat {
    #[must_use]
    pub const fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// Precision fitting ticks of `domain` split into `count` steps.
    #[must_use]
    pub fn for_domain(domain: Domain, count: usize) -> Self {
        let step = ticks::tick_step(domain.min(), domain.max(), count);
        Self::with_precision(ticks::precision_for_step(step))
    }

    /// Formatter the Y axis uses for its default tick density.
    #[must_use]
    pub fn for_axis(domain: Domain) -> Self {
        Self::for_domain(domain, DEFAULT_TICK_COUNT)
    }

    #[must_use]
    pub fn precision(self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        format_grouped_decimal(value, self.precision)
    }
}

/// `value` with `precision` decimals and `,` between thousands.
pub(super) fn format_grouped_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let text = format!("{:.precision$}", value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    // Negative zero after rounding prints without a sign.
    if value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Label for a time tick, picking the coarsest unit the instant is aligned
/// to: fractional seconds, seconds, minutes, days, weeks, months, then years.
pub(super) fn format_time_tick(time_ms: f64) -> String {
    let Some(dt) = to_utc(time_ms) else {
        return format_grouped_decimal(time_ms, 0);
    };

    let pattern = if dt.timestamp_subsec_millis() != 0 {
        ".%3f"
    } else if dt.second() != 0 {
        ":%S"
    } else if dt.minute() != 0 || dt.hour() != 0 {
        "%H:%M"
    } else if dt.day() != 1 {
        if dt.weekday() == Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        }
    } else if dt.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    dt.format(pattern).to_string()
}

/// Crosshair time label in UTC using a strftime `pattern`.
pub(super) fn format_crosshair_time(time_ms: f64, pattern: &str) -> String {
    match to_utc(time_ms) {
        Some(dt) => dt.format(pattern).to_string(),
        None => format_grouped_decimal(time_ms, 0),
    }
}

pub(super) fn format_crosshair_value(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    format!("{value:.precision$}")
}

fn to_utc(time_ms: f64) -> Option<DateTime<Utc>> {
    if !time_ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(time_ms.round() as i64)
}
