use serde::{Deserialize, Serialize};

use crate::core::Domain;
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a value domain to a fixed pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is the normal
/// case for a Y axis where the top pixel row shows the maximum value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    /// Replaces the visible domain; the pixel range is untouched.
    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_range_inverted(self) -> bool {
        self.range_end < self.range_start
    }

    /// Maps a value to its pixel position.
    ///
    /// A degenerate domain maps every value to the middle of the range.
    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain.min()) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back to a value through the current domain.
    #[must_use]
    pub fn to_value(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain.min() + normalized * self.domain.span()
    }

    /// Inverts a pixel interval given in range order (`first` maps closer to
    /// `range_start`).
    ///
    /// For an inverted range the caller's pixels arrive top-first, which is
    /// value-descending; the endpoints are swapped before inversion so the
    /// resulting domain is ascending.
    pub fn invert_interval(self, first: f64, second: f64) -> ChartResult<Domain> {
        if !first.is_finite() || !second.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel interval must be finite".to_owned(),
            ));
        }
        let (low_px, high_px) = if self.is_range_inverted() {
            (second, first)
        } else {
            (first, second)
        };
        Domain::new(self.to_value(low_px), self.to_value(high_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_interval_is_swapped_before_inversion() {
        let domain = Domain::new(0.0, 100.0).expect("domain");
        let scale = LinearScale::new(domain, 500.0, 0.0).expect("scale");
        let inverted = scale.invert_interval(100.0, 400.0).expect("invert");
        assert!((inverted.min() - 20.0).abs() <= 1e-9);
        assert!((inverted.max() - 80.0).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_middle() {
        let scale = LinearScale::new(Domain::point(3.0).expect("point"), 0.0, 200.0)
            .expect("degenerate domain still builds");
        assert_eq!(scale.to_pixel(3.0), 100.0);
        assert_eq!(scale.to_value(150.0), 3.0);
    }
}
