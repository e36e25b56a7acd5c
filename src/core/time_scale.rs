use serde::{Deserialize, Serialize};

use crate::core::{Domain, LinearScale, ZoomTransform};
use crate::error::ChartResult;

/// Time axis: epoch-millisecond domain mapped left to right.
///
/// The time domain is never niced so brushes and resets land on the exact
/// requested instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(domain, pixel_start, pixel_end)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.linear.domain()
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.linear.set_domain(domain);
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.to_pixel(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.to_value(pixel)
    }

    /// Domain covered by the pixel interval `[left, right]`.
    pub fn invert_interval(self, left: f64, right: f64) -> ChartResult<Domain> {
        self.linear.invert_interval(left, right)
    }

    /// Rewrites this scale from `base` viewed through `transform`.
    pub fn rescale_from(&mut self, base: TimeScale, transform: ZoomTransform) -> ChartResult<()> {
        self.linear = transform.rescale(base.linear)?;
        Ok(())
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }
}
