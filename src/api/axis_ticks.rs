use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

use crate::core::ticks;
use crate::core::{TimeScale, ValueScale};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;
/// Widest calendar step; chrono dates end within a few hundred millennia.
const MAX_YEAR_STEP: f64 = 100_000.0;

/// One labelled tick: data value and its pixel position on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

/// Calendar-friendly step between time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimeInterval {
    Millis(u64),
    Months(u32),
}

impl TimeInterval {
    fn approx_ms(self) -> f64 {
        match self {
            Self::Millis(ms) => ms as f64,
            Self::Months(months) if months % 12 == 0 => f64::from(months / 12) * YEAR_MS,
            Self::Months(months) => f64::from(months) * MONTH_MS,
        }
    }
}

const TIME_INTERVAL_LADDER: [TimeInterval; 18] = [
    TimeInterval::Millis(1_000),
    TimeInterval::Millis(5_000),
    TimeInterval::Millis(15_000),
    TimeInterval::Millis(30_000),
    TimeInterval::Millis(60_000),
    TimeInterval::Millis(5 * 60_000),
    TimeInterval::Millis(15 * 60_000),
    TimeInterval::Millis(30 * 60_000),
    TimeInterval::Millis(3_600_000),
    TimeInterval::Millis(3 * 3_600_000),
    TimeInterval::Millis(6 * 3_600_000),
    TimeInterval::Millis(12 * 3_600_000),
    TimeInterval::Millis(86_400_000),
    TimeInterval::Millis(2 * 86_400_000),
    TimeInterval::Millis(7 * 86_400_000),
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Months(12),
];

/// Desired tick count for an axis `span_px` long with ticks every
/// `spacing_px`; never below 2.
pub(super) fn axis_tick_count(span_px: f64, spacing_px: f64) -> usize {
    if !span_px.is_finite() || !spacing_px.is_finite() || spacing_px <= 0.0 {
        return 2;
    }
    ((span_px / spacing_px).round() as usize).max(2)
}

/// Nice linear ticks over the current value domain.
pub(super) fn value_axis_ticks(scale: ValueScale, count: usize) -> Vec<AxisTick> {
    let domain = scale.domain();
    ticks::linear_ticks(domain.min(), domain.max(), count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            pixel: scale.value_to_pixel(value),
        })
        .collect()
}

/// Picks the ladder interval closest to `span / count`.
///
/// Spans shorter than the first rung fall back to a millisecond linear step,
/// spans longer than a year to whole multi-year steps.
pub(super) fn select_time_interval(span_ms: f64, count: usize) -> TimeInterval {
    let target = span_ms / count.max(1) as f64;
    if !target.is_finite() || target <= 0.0 {
        return TimeInterval::Millis(1_000);
    }

    if target < TIME_INTERVAL_LADDER[0].approx_ms() {
        let step = ticks::tick_step(0.0, span_ms, count).max(1.0);
        return TimeInterval::Millis(step.round().max(1.0) as u64);
    }
    if target > YEAR_MS {
        let years = ticks::tick_step(0.0, span_ms / YEAR_MS, count).clamp(1.0, MAX_YEAR_STEP);
        return TimeInterval::Months(years.round() as u32 * 12);
    }

    // Rungs are sorted, so the first one at or above the target is the
    // upper neighbour.
    let upper = TIME_INTERVAL_LADDER
        .iter()
        .position(|interval| interval.approx_ms() >= target)
        .unwrap_or(TIME_INTERVAL_LADDER.len() - 1);
    if upper == 0 {
        return TIME_INTERVAL_LADDER[0];
    }
    let lower = TIME_INTERVAL_LADDER[upper - 1];
    let upper = TIME_INTERVAL_LADDER[upper];
    if target / lower.approx_ms() < upper.approx_ms() / target {
        lower
    } else {
        upper
    }
}

/// Time ticks inside the current X domain, aligned to the chosen interval.
pub(super) fn time_axis_ticks(scale: TimeScale, count: usize) -> Vec<AxisTick> {
    let domain = scale.domain();
    let to_tick = |value: f64| AxisTick {
        value,
        pixel: scale.time_to_pixel(value),
    };
    if domain.is_degenerate() {
        return vec![to_tick(domain.min())];
    }

    let values = match select_time_interval(domain.span(), count) {
        TimeInterval::Millis(step) => fixed_step_times(domain.min(), domain.max(), step as f64),
        TimeInterval::Months(months) => calendar_month_times(domain.min(), domain.max(), months),
    };
    values.into_iter().map(to_tick).collect()
}

fn fixed_step_times(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut values: Vec<f64> = ticks::tick_indices((start / step).ceil(), (stop / step).floor())
        .map(|index| index * step)
        .collect();
    values.dedup();
    values
}

fn calendar_month_times(start: f64, stop: f64, months: u32) -> Vec<f64> {
    let Some(start_dt) = DateTime::<Utc>::from_timestamp_millis(start.floor() as i64) else {
        return Vec::new();
    };

    let month_index = start_dt.year() * 12 + start_dt.month0() as i32;
    let aligned = month_index - month_index.rem_euclid(months as i32);
    let Some(mut cursor) = Utc
        .with_ymd_and_hms(aligned.div_euclid(12), (aligned.rem_euclid(12) + 1) as u32, 1, 0, 0, 0)
        .single()
    else {
        return Vec::new();
    };

    let mut values = Vec::new();
    loop {
        let ms = cursor.timestamp_millis() as f64;
        if ms > stop {
            break;
        }
        if ms >= start {
            values.push(ms);
        }
        match cursor.checked_add_months(Months::new(months)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Domain;

    #[test]
    fn tick_count_follows_spacing() {
        assert_eq!(axis_tick_count(840.0, 80.0), 11);
        assert_eq!(axis_tick_count(470.0, 70.0), 7);
        assert_eq!(axis_tick_count(10.0, 80.0), 2);
    }

    #[test]
    fn interval_ladder_picks_nearest_rung() {
        assert_eq!(
            select_time_interval(10.0 * MINUTE_MS, 10),
            TimeInterval::Millis(60_000)
        );
        assert_eq!(
            select_time_interval(10.0 * DAY_MS, 10),
            TimeInterval::Millis(86_400_000)
        );
        assert_eq!(select_time_interval(280.0 * DAY_MS, 10), TimeInterval::Months(1));
    }

    #[test]
    fn multi_year_steps_stay_bounded() {
        let TimeInterval::Months(months) = select_time_interval(1e300, 10) else {
            panic!("expected a calendar step");
        };
        assert_eq!(f64::from(months), MAX_YEAR_STEP * 12.0);
        assert_eq!(
            select_time_interval(40.0 * YEAR_MS, 10),
            TimeInterval::Months(60)
        );
    }

    #[test]
    fn ticks_far_outside_calendar_range_terminate() {
        let scale = TimeScale::new(Domain::new(-1e300, 1e300).expect("domain"), 0.0, 840.0)
            .expect("scale");
        assert!(time_axis_ticks(scale, 11).is_empty());

        let values = fixed_step_times(2f64.powi(63), 2f64.powi(63) + 5_000.0, 1_000.0);
        assert!(!values.is_empty());
        assert!(values.len() <= 6);
    }

    #[test]
    fn minute_ticks_are_aligned() {
        let scale = TimeScale::new(
            Domain::new(30_000.0, 30_000.0 + 10.0 * MINUTE_MS).expect("domain"),
            0.0,
            600.0,
        )
        .expect("scale");
        let ticks = time_axis_ticks(scale, 10);
        assert_eq!(ticks.len(), 10);
        assert!(ticks.iter().all(|tick| tick.value % MINUTE_MS == 0.0));
    }

    #[test]
    fn month_ticks_land_on_first_of_month() {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
            .single()
            .expect("start")
            .timestamp_millis() as f64;
        let values = calendar_month_times(start, start + 100.0 * DAY_MS, 1);
        assert_eq!(values.len(), 3);
        let first = DateTime::<Utc>::from_timestamp_millis(values[0] as i64).expect("dt");
        assert_eq!((first.month(), first.day()), (2, 1));
    }
}
