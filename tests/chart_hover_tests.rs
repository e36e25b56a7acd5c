use chart_minimap::api::{ChartView, ChartViewConfig};
use chart_minimap::core::{DataPoint, Dataset, Series};
use chart_minimap::interaction::AxisHighlight;
use chart_minimap::render::{NullRenderer, TextHAlign};

fn ramp() -> Dataset {
    let points = (0..=100)
        .map(|i| DataPoint::new(f64::from(i) * 1_000.0, f64::from(i)))
        .collect();
    Dataset::new(vec![Series::new(points)])
}

fn chart() -> ChartView<NullRenderer> {
    ChartView::new(ramp(), ChartViewConfig::default(), NullRenderer::default())
        .expect("chart init")
}

#[test]
fn crosshair_follows_pointer_over_plot() {
    let mut chart = chart();
    let idle_lines = chart.renderer().last_line_count;
    let idle_texts = chart.renderer().last_text_count;
    assert!(chart.crosshair_labels().is_none());

    chart.pointer_move(450.0, 265.0).expect("move");

    let crosshair = chart.crosshair();
    assert!(crosshair.visible);
    assert!((crosshair.time - 50_000.0).abs() <= 1e-6);
    assert!((crosshair.value - 50.0).abs() <= 1e-9);

    let (time_label, value_label) = chart.crosshair_labels().expect("labels");
    assert_eq!(time_label, "00:00:50");
    assert_eq!(value_label, "50.00");

    assert_eq!(chart.renderer().last_line_count, idle_lines + 2);
    assert_eq!(chart.renderer().last_text_count, idle_texts + 2);
}

#[test]
fn crosshair_hides_outside_plot_and_on_leave() {
    let mut chart = chart();
    chart.pointer_move(450.0, 265.0).expect("move");
    chart.pointer_move(450.0, 520.0).expect("move onto axis");
    assert!(!chart.crosshair().visible);

    chart.pointer_move(450.0, 265.0).expect("move back");
    chart.pointer_leave().expect("leave");
    assert!(!chart.crosshair().visible);
    assert_eq!(chart.axis_highlight(), AxisHighlight::default());
}

#[test]
fn axes_highlight_under_pointer() {
    let mut chart = chart();
    let idle_rects = chart.renderer().last_rect_count;

    chart.pointer_move(400.0, 520.0).expect("over x axis");
    assert_eq!(
        chart.axis_highlight(),
        AxisHighlight {
            x_axis: true,
            y_axis: false
        }
    );
    assert_eq!(chart.renderer().last_rect_count, idle_rects + 1);

    chart.pointer_move(10.0, 200.0).expect("over y gutter");
    assert_eq!(
        chart.axis_highlight(),
        AxisHighlight {
            x_axis: false,
            y_axis: true
        }
    );

    chart.pointer_leave().expect("leave");
    assert_eq!(chart.renderer().last_rect_count, idle_rects);
}

#[test]
fn y_highlight_is_suppressed_while_y_brushing() {
    let mut chart = chart();
    chart.pointer_move(10.0, 200.0).expect("hover gutter");
    assert!(chart.axis_highlight().y_axis);

    chart.pointer_down(10.0, 265.0).expect("down");
    assert!(!chart.axis_highlight().y_axis);
    chart.pointer_move(10.0, 200.0).expect("drag");
    assert!(!chart.axis_highlight().y_axis);
}

#[test]
fn y_brush_labels_are_drawn_beside_handles() {
    let mut chart = chart();
    chart.pointer_down(10.0, 265.0).expect("down");
    chart.pointer_move(10.0, 124.0).expect("drag");

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    let labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Left && text.x == 2.0)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["80", "50"]);

    let config = chart.config();
    let boxes = frame
        .rects
        .iter()
        .filter(|rect| rect.x == 0.0 && rect.width == config.brush_label_width_px)
        .count();
    assert_eq!(boxes, 2);
}

#[test]
fn initial_frame_carries_series_and_both_axes() {
    let chart = chart();
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_path_count, 1);

    let frame = renderer.last_frame.as_ref().expect("frame");
    frame.validate().expect("valid frame");
    let right_aligned = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .count();
    let centered = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .count();
    assert!(right_aligned >= 2, "value axis labels");
    assert!(centered >= 2, "time axis labels");
}

#[test]
fn draw_helpers_resubmit_without_touching_domains() {
    let mut chart = chart();
    let domains = chart.scales().domains();
    let before = chart.stats();

    chart.draw_lines().expect("lines");
    chart.draw_axes().expect("axes");

    let after = chart.stats();
    assert_eq!(chart.scales().domains(), domains);
    assert_eq!(after.line_redraws, before.line_redraws + 1);
    assert_eq!(after.x_axis_redraws, before.x_axis_redraws + 1);
    assert_eq!(after.y_axis_redraws, before.y_axis_redraws + 1);
    assert_eq!(after.frames_rendered, before.frames_rendered + 2);
    assert_eq!(after.domain_mutations, before.domain_mutations);
}
