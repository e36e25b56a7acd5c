//! chart-minimap: a time-series line chart linked to a brushable overview.
//!
//! The crate is headless. Hosts feed pointer, wheel and click events in
//! view-local pixels and receive deterministic draw frames through the
//! [`render::Renderer`] trait. The two views never reference each other:
//! the chart publishes its visible domains on a selection channel, the
//! minimap publishes brushed regions on a region channel, and
//! [`LinkedCharts`] drains both in a fixed order so updates cannot loop.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod sync;
pub mod telemetry;

pub use api::{
    ChartView, ChartViewConfig, InputEvent, LinkedCharts, LinkedChartsConfig, MinimapConfig,
    MinimapView, ResetWindow, ViewTarget,
};
pub use error::{ChartError, ChartResult};
