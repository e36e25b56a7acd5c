use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed value-space interval `[min, max]` with `min <= max`.
///
/// Serializes as a two-element array so selection payloads read
/// `{"xSelection": [min, max], ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Creates an ordered domain. Fails when the bounds are not finite or
    /// arrive reversed.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "domain bounds are reversed: min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a domain from two bounds in either order.
    pub fn spanning(a: f64, b: f64) -> ChartResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    /// Zero-width domain at `value`.
    pub fn point(value: f64) -> ChartResult<Self> {
        Self::new(value, value)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The trailing `fraction` of this domain, anchored at `max`.
    ///
    /// `fraction` is clamped to `(0, 1]`; non-finite fractions keep the whole domain.
    #[must_use]
    pub fn most_recent(self, fraction: f64) -> Self {
        if !fraction.is_finite() || fraction >= 1.0 || fraction <= 0.0 {
            return self;
        }
        Self {
            min: self.max - self.span() * fraction,
            max: self.max,
        }
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.min - other.min).abs() <= epsilon && (self.max - other.max).abs() <= epsilon
    }
}

impl TryFrom<[f64; 2]> for Domain {
    type Error = ChartError;

    fn try_from(value: [f64; 2]) -> ChartResult<Self> {
        Self::new(value[0], value[1])
    }
}

impl From<Domain> for [f64; 2] {
    fn from(value: Domain) -> Self {
        [value.min, value.max]
    }
}
