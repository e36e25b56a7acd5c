mod axis_label_format;
mod axis_render_frame_builder;
mod axis_ticks;
mod chart_config;
mod chart_view;
mod chart_view_input;
mod linked_charts;
mod minimap_view;
mod overlay_render_frame_builder;
mod series_render_frame_builder;
mod validation;
mod view_stats;

pub use axis_label_format::ValueLabelFormat;
pub use axis_ticks::AxisTick;
pub use chart_config::{
    ChartViewConfig, GestureConfig, LineStyle, LinkedChartsConfig, MinimapConfig, ResetWindow,
};
pub use chart_view::{ChartView, Propagation, YBrushLabels};
pub use linked_charts::{InputEvent, LinkedCharts, SyncReport, ViewTarget};
pub use minimap_view::MinimapView;
pub use view_stats::ViewStats;
