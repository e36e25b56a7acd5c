//! Linear tick math: step selection, outward "nice" rounding and tick
//! generation over a numeric interval.

use smallvec::SmallVec;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Default tick count used for niceing and label precision.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Upper bound on ticks generated for a single axis.
pub const MAX_TICKS: usize = 1_000;

pub type TickValues = SmallVec<[f64; 16]>;

/// Signed tick increment for `[start, stop]` split into about `count` steps.
///
/// Positive results are the step itself. Negative results encode a fractional
/// step as `-1 / step` so sub-unit steps stay exact integers.
/// Returns `0.0` when no step exists (empty or non-finite interval).
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let step = (stop - start) / count as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Unsigned tick step for `[start, stop]`; `0.0` when none exists.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let increment = tick_increment(lo, hi, count);
    if increment > 0.0 {
        increment
    } else if increment < 0.0 {
        -1.0 / increment
    } else {
        0.0
    }
}

/// Extends `[start, stop]` outward to tick-aligned bounds.
///
/// Degenerate or non-finite intervals are returned unchanged.
#[must_use]
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }

    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed {
        (stop, start)
    } else {
        (start, stop)
    };

    let mut previous_step = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if previous_step == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}

/// Integer tick indices `first..=last`, at most [`MAX_TICKS`] of them.
///
/// The count is taken up front, so indices too large for `+ 1.0` to change
/// still terminate.
pub fn tick_indices(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let count = if first.is_finite() && last.is_finite() && last >= first {
        ((last - first) as usize).saturating_add(1).min(MAX_TICKS)
    } else {
        0
    };
    (0..count).map(move |offset| first + offset as f64)
}

/// Tick values inside `[start, stop]`, ascending.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let (lo, hi) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 || !increment.is_finite() {
        return ticks;
    }

    if increment > 0.0 {
        let mut r0 = (lo / increment).round();
        let mut r1 = (hi / increment).round();
        if r0 * increment < lo {
            r0 += 1.0;
        }
        if r1 * increment > hi {
            r1 -= 1.0;
        }
        for index in tick_indices(r0, r1) {
            ticks.push(index * increment);
        }
    } else {
        let inverse = -increment;
        let mut r0 = (lo * inverse).round();
        let mut r1 = (hi * inverse).round();
        if r0 / inverse < lo {
            r0 += 1.0;
        }
        if r1 / inverse > hi {
            r1 -= 1.0;
        }
        for index in tick_indices(r0, r1) {
            ticks.push(index / inverse);
        }
    }
    // Past 2^53 neighbouring indices collapse onto the same float.
    ticks.dedup();

    ticks
}

/// Fixed decimal precision that distinguishes ticks spaced `step` apart.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // Bias keeps exact powers of ten from flooring one decade low.
    let exponent = (step.abs().log10() + 1e-9).floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}
