pub mod domain;
pub mod line_series;
pub mod scale;
pub mod scale_pair;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod zoom;

pub use domain::Domain;
pub use line_series::{LinePath, project_dataset, project_line_paths};
pub use scale::LinearScale;
pub use scale_pair::{FullDomains, ScalePair};
pub use time_scale::TimeScale;
pub use types::{DataPoint, Dataset, Layout, Margin, PlotBounds, Series, ViewRegion};
pub use value_scale::ValueScale;
pub use zoom::{ScaleExtent, ZoomTransform};
