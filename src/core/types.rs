use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One sample of a time series.
///
/// `x` is a timestamp in epoch milliseconds. A NaN `y` marks a gap: line
/// projection breaks the path there instead of interpolating across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the sample can be drawn (both coordinates finite).
    #[must_use]
    pub fn is_defined(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Zips timestamp and value columns into points.
    pub fn from_columns(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidData(format!(
                "series columns differ in length: x={}, y={}",
                x.len(),
                y.len()
            )));
        }

        let points = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect();
        Ok(Self { points })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct ColumnSeries {
    x: Vec<f64>,
    y: Vec<Option<f64>>,
}

/// Series sharing one coordinate system; insertion order is draw order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Parses the column fixture format `[{"x": [ms, ...], "y": [v | null, ...]}]`.
    ///
    /// `null` values become NaN gaps.
    pub fn from_columns_json(input: &str) -> ChartResult<Self> {
        let columns: Vec<ColumnSeries> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))?;

        let series = columns
            .into_iter()
            .map(|column| {
                let y: Vec<f64> = column
                    .y
                    .into_iter()
                    .map(|value| value.unwrap_or(f64::NAN))
                    .collect();
                Series::from_columns(&column.x, &y)
            })
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(Self { series })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.series.iter().flat_map(|series| series.points.iter().copied())
    }

    /// Extent of finite timestamps across every series.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.points()
            .map(|point| point.x)
            .filter(|x| x.is_finite())
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((min, max)) => Some((min.min(x), max.max(x))),
            })
    }

    /// Largest finite value across every series; NaN gaps are ignored.
    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.points()
            .map(|point| point.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| Some(acc.map_or(y, |max: f64| max.max(y))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Pixel size and margins of one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

/// Plot-area bounds derived from a layout.
///
/// `y_min` is the pixel row of the minimum value (bottom of the plot) and
/// `y_max` the row of the maximum value (top), so the Y pixel range is
/// inverted relative to the value domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_min - self.y_max
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_max && y <= self.y_min
    }
}

/// Interactive region of a chart view under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewRegion {
    /// Plot body: X brush and crosshair.
    Plot,
    /// Gutter left of the plot holding the Y axis: Y brush.
    YAxisGutter,
    /// Strip under the plot holding the X axis: drag-to-pan and wheel zoom.
    XAxis,
    Outside,
}

impl Layout {
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[must_use]
    pub fn bounds(self) -> PlotBounds {
        PlotBounds {
            x_min: self.margin.left,
            x_max: self.width - self.margin.right,
            y_min: self.height - self.margin.bottom,
            y_max: self.margin.top,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidLayout {
            width: self.width,
            height: self.height,
        };

        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(invalid());
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid());
        }
        let margin = self.margin;
        if [margin.top, margin.right, margin.bottom, margin.left]
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(invalid());
        }

        let bounds = self.bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(invalid());
        }
        Ok(self)
    }

    #[must_use]
    pub fn hit_test(self, x: f64, y: f64) -> ViewRegion {
        if !x.is_finite() || !y.is_finite() {
            return ViewRegion::Outside;
        }
        if x < 0.0 || x > self.width || y < 0.0 || y > self.height {
            return ViewRegion::Outside;
        }

        let bounds = self.bounds();
        if bounds.contains(x, y) {
            ViewRegion::Plot
        } else if x < bounds.x_min && y <= bounds.y_min {
            ViewRegion::YAxisGutter
        } else if x >= bounds.x_min && x <= bounds.x_max && y > bounds.y_min {
            ViewRegion::XAxis
        } else {
            ViewRegion::Outside
        }
    }
}
