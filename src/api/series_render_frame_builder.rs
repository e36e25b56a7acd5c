use crate::core::{Dataset, Layout, ScalePair, project_dataset};
use crate::render::{PathPrimitive, RenderFrame};

use super::LineStyle;

/// One path per unbroken run of every series, in dataset order.
pub(super) fn build_series_frame(
    layout: Layout,
    dataset: &Dataset,
    scales: &ScalePair,
    style: LineStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout);
    frame.paths = project_dataset(dataset, scales)
        .into_iter()
        .map(|path| PathPrimitive {
            points: path.points,
            stroke_width: style.width,
            color: style.color,
        })
        .collect();
    frame
}
