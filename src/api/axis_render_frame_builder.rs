use crate::core::{Layout, TimeScale, ValueScale};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_label_format::{ValueLabelFormat, format_time_tick};
use super::axis_ticks::{axis_tick_count, time_axis_ticks, value_axis_ticks};

const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const AXIS_LINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisStyle {
    pub color: Color,
    pub grid_color: Color,
    pub font_size_px: f64,
}

/// Bottom time axis: domain line along the plot bottom, outward ticks and
/// centered labels below them.
pub(super) fn build_time_axis_frame(
    layout: Layout,
    scale: TimeScale,
    tick_spacing_px: f64,
    style: AxisStyle,
) -> RenderFrame {
    let bounds = layout.bounds();
    let axis_y = bounds.y_min;
    let mut frame = RenderFrame::new(layout).with_line(LinePrimitive::new(
        bounds.x_min,
        axis_y,
        bounds.x_max,
        axis_y,
        AXIS_LINE_WIDTH,
        style.color,
    ));

    let count = axis_tick_count(layout.width, tick_spacing_px);
    for tick in time_axis_ticks(scale, count) {
        frame.lines.push(LinePrimitive::new(
            tick.pixel,
            axis_y,
            tick.pixel,
            axis_y + TICK_SIZE_PX,
            AXIS_LINE_WIDTH,
            style.color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_time_tick(tick.value),
            tick.pixel,
            axis_y + TICK_SIZE_PX + TICK_PADDING_PX + style.font_size_px,
            style.font_size_px,
            style.color,
            TextHAlign::Center,
        ));
    }
    frame
}

/// Left value axis drawn as grid lines spanning the plot, without a domain
/// line, labels right-aligned in the gutter.
pub(super) fn build_value_axis_frame(
    layout: Layout,
    scale: ValueScale,
    tick_spacing_px: f64,
    style: AxisStyle,
) -> RenderFrame {
    let bounds = layout.bounds();
    let mut frame = RenderFrame::new(layout);
    let format = ValueLabelFormat::for_axis(scale.domain());

    let count = axis_tick_count(layout.height, tick_spacing_px);
    for tick in value_axis_ticks(scale, count) {
        frame.lines.push(LinePrimitive::new(
            bounds.x_min,
            tick.pixel,
            bounds.x_max,
            tick.pixel,
            AXIS_LINE_WIDTH,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format.format(tick.value),
            bounds.x_min - TICK_PADDING_PX,
            tick.pixel + style.font_size_px / 3.0,
            style.font_size_px,
            style.color,
            TextHAlign::Right,
        ));
    }
    frame
}
