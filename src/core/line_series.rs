use serde::{Deserialize, Serialize};

use crate::core::{Dataset, ScalePair, Series};

/// One unbroken run of a projected series in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub series_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// Projects a series into pixel runs, starting a new run after every
/// undefined (NaN) sample so gaps are never bridged.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry.
#[must_use]
pub fn project_line_paths(series: &Series, series_index: usize, scales: &ScalePair) -> Vec<LinePath> {
    let mut paths = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for point in &series.points {
        if point.is_defined() {
            current.push(scales.project(point.x, point.y));
        } else if !current.is_empty() {
            paths.push(LinePath {
                series_index,
                points: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        paths.push(LinePath {
            series_index,
            points: current,
        });
    }

    paths
}

/// Projects every series in draw order.
#[must_use]
pub fn project_dataset(dataset: &Dataset, scales: &ScalePair) -> Vec<LinePath> {
    dataset
        .series
        .iter()
        .enumerate()
        .flat_map(|(index, series)| project_line_paths(series, index, scales))
        .collect()
}
