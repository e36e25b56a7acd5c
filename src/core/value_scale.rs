use serde::{Deserialize, Serialize};

use crate::core::ticks::{self, DEFAULT_TICK_COUNT};
use crate::core::{Domain, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Value axis mapped onto an inverted Y pixel range (top row = max value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    /// Builds the scale without rounding the domain.
    pub fn new(domain: Domain, pixel_bottom: f64, pixel_top: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(domain, pixel_bottom, pixel_top)?,
        })
    }

    /// Builds the scale and rounds the domain outward to tick-friendly bounds.
    ///
    /// Niceing happens once here; later `set_domain` calls keep their exact
    /// bounds.
    pub fn new_niced(domain: Domain, pixel_bottom: f64, pixel_top: f64) -> ChartResult<Self> {
        let (min, max) = ticks::nice(domain.min(), domain.max(), DEFAULT_TICK_COUNT);
        Self::new(Domain::new(min, max)?, pixel_bottom, pixel_top)
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.linear.domain()
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.linear.set_domain(domain);
    }

    /// Pixel range as `(bottom, top)`.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.to_value(pixel)
    }

    /// Domain covered by a screen interval given top row first.
    ///
    /// Screen order is value-descending on this axis, so the endpoints are
    /// reversed before inversion.
    pub fn invert_screen_interval(self, top: f64, bottom: f64) -> ChartResult<Domain> {
        if !top.is_finite() || !bottom.is_finite() {
            return Err(ChartError::InvalidData(
                "pixel interval must be finite".to_owned(),
            ));
        }
        let (low_px, high_px) = (bottom, top);
        Domain::new(self.pixel_to_value(low_px), self.pixel_to_value(high_px))
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }
}
