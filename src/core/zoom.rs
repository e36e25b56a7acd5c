use serde::{Deserialize, Serialize};

use crate::core::{Domain, LinearScale};
use crate::error::{ChartError, ChartResult};

/// One-dimensional zoom transform `pixel -> pixel * k + x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Allowed range of the zoom scale `k`, relative to the zoom base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min_k: f64,
    pub max_k: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min_k: 1e-3,
            max_k: 1e6,
        }
    }
}

impl ScaleExtent {
    pub fn validate(self) -> ChartResult<Self> {
        let valid = self.min_k.is_finite()
            && self.max_k.is_finite()
            && self.min_k > 0.0
            && self.min_k <= 1.0
            && self.max_k >= 1.0;
        if !valid {
            return Err(ChartError::InvalidConfig(
                "zoom scale extent must satisfy 0 < min_k <= 1 <= max_k".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, k: f64) -> f64 {
        k.clamp(self.min_k, self.max_k)
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0 };

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.x) / self.k
    }

    /// Translates the transform by `delta_px` screen pixels.
    pub fn translated(self, delta_px: f64) -> ChartResult<Self> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }
        Ok(Self {
            k: self.k,
            x: self.x + delta_px,
        })
    }

    /// Scales the transform by `factor` keeping `anchor_px` fixed on screen.
    pub fn scaled_around(self, factor: f64, anchor_px: f64) -> ChartResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_px.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        Ok(Self {
            k: self.k * factor,
            x: anchor_px - (anchor_px - self.x) * factor,
        })
    }

    /// Scales by `factor` around `anchor_px` with the resulting `k` held
    /// inside `extent`. Factors that underflow to `0` or overflow to
    /// infinity saturate at the extent bounds.
    pub fn scaled_around_within(
        self,
        factor: f64,
        anchor_px: f64,
        extent: ScaleExtent,
    ) -> ChartResult<Self> {
        if factor.is_nan() || factor < 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be >= 0".to_owned(),
            ));
        }
        let k = extent.clamp(self.k * factor);
        self.scaled_around(k / self.k, anchor_px)
    }

    /// Returns `base` with its domain rewritten so that the transformed view
    /// of `base` fills the same pixel range.
    pub fn rescale(self, base: LinearScale) -> ChartResult<LinearScale> {
        let (range_start, range_end) = base.range();
        let start = base.to_value(self.invert_x(range_start));
        let end = base.to_value(self.invert_x(range_end));
        let mut rescaled = base;
        rescaled.set_domain(Domain::spanning(start, end)?);
        Ok(rescaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_shifts_domain_against_drag() {
        let base = LinearScale::new(Domain::new(0.0, 100.0).expect("domain"), 0.0, 1000.0)
            .expect("scale");
        let transform = ZoomTransform::IDENTITY.translated(100.0).expect("translate");
        let rescaled = transform.rescale(base).expect("rescale");
        assert!(rescaled.domain().approx_eq(Domain::new(-10.0, 90.0).expect("domain"), 1e-9));
    }

    #[test]
    fn extreme_factors_saturate_at_extent() {
        let extent = ScaleExtent::default();
        let zoomed_out = ZoomTransform::IDENTITY
            .scaled_around_within(0.0, 250.0, extent)
            .expect("zoom out");
        assert!((zoomed_out.k - extent.min_k).abs() <= 1e-15);

        let zoomed_in = ZoomTransform::IDENTITY
            .scaled_around_within(f64::INFINITY, 250.0, extent)
            .expect("zoom in");
        assert!((zoomed_in.k - extent.max_k).abs() <= 1e-6);
        assert!((zoomed_in.invert_x(250.0) - 250.0).abs() <= 1e-9);

        assert!(ZoomTransform::IDENTITY
            .scaled_around_within(f64::NAN, 250.0, extent)
            .is_err());
    }

    #[test]
    fn scaling_keeps_anchor_value() {
        let base = LinearScale::new(Domain::new(0.0, 100.0).expect("domain"), 0.0, 1000.0)
            .expect("scale");
        let transform = ZoomTransform::IDENTITY
            .scaled_around(2.0, 250.0)
            .expect("scale");
        let rescaled = transform.rescale(base).expect("rescale");
        assert!((rescaled.to_value(250.0) - 25.0).abs() <= 1e-9);
        assert!(rescaled.domain().approx_eq(Domain::new(12.5, 62.5).expect("domain"), 1e-9));
    }
}
