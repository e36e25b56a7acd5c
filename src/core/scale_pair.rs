use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Dataset, Domain, PlotBounds, TimeScale, ValueScale};
use crate::error::ChartResult;

/// Full-data domains of a dataset, retained as the reset target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FullDomains {
    pub x: Domain,
    pub y: Domain,
}

impl FullDomains {
    /// Extent of every timestamp for X, `[0, max value]` for Y.
    ///
    /// Empty or all-NaN data yields zero-width domains at 0 rather than an
    /// error; such charts render degenerate but stay interactive.
    pub fn from_dataset(dataset: &Dataset) -> ChartResult<Self> {
        let x = match dataset.x_extent() {
            Some((min, max)) => Domain::new(min, max)?,
            None => Domain::point(0.0)?,
        };
        let y = match dataset.y_max() {
            Some(max) => Domain::spanning(0.0, max)?,
            None => Domain::point(0.0)?,
        };

        debug!(
            series = dataset.len(),
            points = dataset.point_count(),
            x_min = x.min(),
            x_max = x.max(),
            y_max = y.max(),
            "computed full data domains"
        );
        Ok(Self { x, y })
    }
}

/// Time scale and value scale of one view, both bound to its plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    x: TimeScale,
    y: ValueScale,
}

impl ScalePair {
    /// Builds both scales over `bounds`; the Y domain is niced once here.
    pub fn for_plot(x_domain: Domain, y_domain: Domain, bounds: PlotBounds) -> ChartResult<Self> {
        let x = TimeScale::new(x_domain, bounds.x_min, bounds.x_max)?;
        let y = ValueScale::new_niced(y_domain, bounds.y_min, bounds.y_max)?;
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(&self) -> TimeScale {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> ValueScale {
        self.y
    }

    pub fn x_mut(&mut self) -> &mut TimeScale {
        &mut self.x
    }

    pub fn y_mut(&mut self) -> &mut ValueScale {
        &mut self.y
    }

    #[must_use]
    pub fn domains(&self) -> (Domain, Domain) {
        (self.x.domain(), self.y.domain())
    }

    pub fn set_domains(&mut self, x: Domain, y: Domain) {
        self.x.set_domain(x);
        self.y.set_domain(y);
    }

    /// Pixel position of a data point under the current domains.
    #[must_use]
    pub fn project(&self, time: f64, value: f64) -> (f64, f64) {
        (self.x.time_to_pixel(time), self.y.value_to_pixel(value))
    }
}
