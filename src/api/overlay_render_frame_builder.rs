use crate::core::Layout;
use crate::interaction::{AxisHighlight, BrushRect, CrosshairState};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartViewConfig, YBrushLabels};

const X_HIGHLIGHT_HEIGHT_PX: f64 = 20.0;
const Y_HIGHLIGHT_LEFT_PX: f64 = 15.0;
const Y_HIGHLIGHT_WIDTH_PX: f64 = 15.0;
const Y_HIGHLIGHT_OVERHANG_PX: f64 = 5.0;
const BRUSH_LABEL_TEXT_INSET_PX: f64 = 2.0;
const BRUSH_LABEL_BASELINE_OFFSET_PX: f64 = 4.0;
const CROSSHAIR_LINE_WIDTH: f64 = 1.0;

/// Axis hover backgrounds, drawn under everything else.
pub(super) fn append_axis_highlights(
    frame: &mut RenderFrame,
    layout: Layout,
    highlight: AxisHighlight,
    color: Color,
) {
    let bounds = layout.bounds();
    if highlight.x_axis {
        frame.rects.push(RectPrimitive::new(
            bounds.x_min,
            bounds.y_min,
            bounds.width(),
            X_HIGHLIGHT_HEIGHT_PX,
            color,
        ));
    }
    if highlight.y_axis {
        frame.rects.push(RectPrimitive::new(
            Y_HIGHLIGHT_LEFT_PX,
            layout.margin.top - Y_HIGHLIGHT_OVERHANG_PX,
            Y_HIGHLIGHT_WIDTH_PX,
            bounds.height() + 2.0 * Y_HIGHLIGHT_OVERHANG_PX,
            color,
        ));
    }
}

pub(super) fn append_brush_selection(frame: &mut RenderFrame, selection: BrushRect, color: Color) {
    frame.rects.push(RectPrimitive::new(
        selection.x0,
        selection.y0,
        selection.width(),
        selection.height(),
        color,
    ));
}

/// Value boxes next to the Y brush handles: north above the top handle,
/// south below the bottom one.
pub(super) fn append_y_brush_labels(
    frame: &mut RenderFrame,
    labels: &YBrushLabels,
    config: &ChartViewConfig,
) {
    let height = config.brush_label_height_px;
    let width = config.brush_label_width_px;

    for (text, box_top, baseline) in [
        (
            &labels.north,
            labels.north_y - height,
            labels.north_y - height / 2.0 + BRUSH_LABEL_BASELINE_OFFSET_PX,
        ),
        (
            &labels.south,
            labels.south_y,
            labels.south_y + height / 2.0 + BRUSH_LABEL_BASELINE_OFFSET_PX,
        ),
    ] {
        frame.rects.push(RectPrimitive::new(
            0.0,
            box_top,
            width,
            height,
            config.brush_label_color,
        ));
        frame.texts.push(TextPrimitive::new(
            text.clone(),
            BRUSH_LABEL_TEXT_INSET_PX,
            baseline,
            config.font_size_px,
            config.brush_label_text_color,
            TextHAlign::Left,
        ));
    }
}

/// Guide lines through the pointer and the two crosshair labels.
pub(super) fn append_crosshair(
    frame: &mut RenderFrame,
    layout: Layout,
    crosshair: CrosshairState,
    labels: (String, String),
    config: &ChartViewConfig,
) {
    let bounds = layout.bounds();
    let color = config.crosshair_color;
    frame.lines.push(LinePrimitive::new(
        crosshair.x,
        bounds.y_min,
        crosshair.x,
        bounds.y_max,
        CROSSHAIR_LINE_WIDTH,
        color,
    ));
    frame.lines.push(LinePrimitive::new(
        bounds.x_min,
        crosshair.y,
        bounds.x_max,
        crosshair.y,
        CROSSHAIR_LINE_WIDTH,
        color,
    ));

    let (time_label, value_label) = labels;
    frame.texts.push(TextPrimitive::new(
        time_label,
        crosshair.x,
        bounds.y_max,
        config.font_size_px,
        config.axis_color,
        TextHAlign::Left,
    ));
    frame.texts.push(TextPrimitive::new(
        value_label,
        bounds.x_min,
        crosshair.y,
        config.font_size_px,
        config.axis_color,
        TextHAlign::Left,
    ));
}
