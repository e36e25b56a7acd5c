use approx::assert_abs_diff_eq;
use chart_minimap::api::{ChartView, ChartViewConfig, Propagation};
use chart_minimap::core::{DataPoint, Dataset, Series};
use chart_minimap::interaction::ActiveGesture;
use chart_minimap::render::NullRenderer;

/// 101 samples, one per second, value equal to the sample index.
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
fn x_brush_narrows_time_domain_and_clears_itself() {
    let mut chart = chart();
    let subscription = chart.subscribe_selections();

    chart.pointer_down(198.0, 200.0).expect("down");
    assert_eq!(chart.active_gesture(), ActiveGesture::XBrush);
    chart.pointer_move(534.0, 220.0).expect("move");
    assert!(chart.x_brush_selection().is_some());

    let propagation = chart.pointer_up(534.0, 220.0).expect("up");
    assert_eq!(propagation, Propagation::Stop);
    assert_eq!(chart.active_gesture(), ActiveGesture::Idle);
    assert!(chart.x_brush_selection().is_none());

    let x = chart.x_scale().domain();
    assert_abs_diff_eq!(x.min(), 20_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(x.max(), 60_000.0, epsilon = 1e-6);
    assert_eq!(chart.y_scale().domain().bounds(), (0.0, 100.0));

    let published = subscription.drain();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0], chart.current_selection());
}

#[test]
fn applied_brush_maps_its_domain_onto_the_full_plot_width() {
    let mut chart = chart();
    chart.pointer_down(198.0, 200.0).expect("down");
    chart.pointer_up(534.0, 200.0).expect("up");

    let x = chart.x_scale();
    let bounds = chart.layout().bounds();
    assert_abs_diff_eq!(x.time_to_pixel(x.domain().min()), bounds.x_min, epsilon = 1e-9);
    assert_abs_diff_eq!(x.time_to_pixel(x.domain().max()), bounds.x_max, epsilon = 1e-9);
}

#[test]
fn click_without_drag_changes_nothing() {
    let mut chart = chart();
    let subscription = chart.subscribe_selections();
    let before = chart.stats();
    let domains = chart.scales().domains();

    chart.pointer_down(300.0, 200.0).expect("down");
    let propagation = chart.pointer_up(300.0, 200.0).expect("up");

    assert_eq!(propagation, Propagation::Continue);
    assert_eq!(chart.scales().domains(), domains);
    let after = chart.stats();
    assert_eq!(after.domain_mutations, before.domain_mutations);
    assert_eq!(after.line_redraws, before.line_redraws);
    assert_eq!(after.x_axis_redraws, before.x_axis_redraws);
    assert_eq!(after.publishes, before.publishes);
    assert_eq!(subscription.pending(), 0);
}

#[test]
fn y_gutter_click_without_drag_changes_nothing() {
    let mut chart = chart();
    let subscription = chart.subscribe_selections();
    let before = chart.stats();
    let domains = chart.scales().domains();

    chart.pointer_down(10.0, 265.0).expect("down");
    assert_eq!(chart.active_gesture(), ActiveGesture::YBrush);
    let propagation = chart.pointer_up(10.0, 265.0).expect("up");

    assert_eq!(propagation, Propagation::Continue);
    assert_eq!(chart.scales().domains(), domains);
    assert!(chart.y_brush_selection().is_none());
    let after = chart.stats();
    assert_eq!(after.domain_mutations, before.domain_mutations);
    assert_eq!(after.line_redraws, before.line_redraws);
    assert_eq!(after.y_axis_redraws, before.y_axis_redraws);
    assert_eq!(after.publishes, before.publishes);
    assert_eq!(subscription.pending(), 0);
}

#[test]
fn repeated_sub_pixel_y_brushes_stay_bounded() {
    let points = (0..=100)
        .map(|i| DataPoint::new(f64::from(i) * 1_000.0, f64::from(i) * 10_000.0))
        .collect();
    let mut chart = ChartView::new(
        Dataset::new(vec![Series::new(points)]),
        ChartViewConfig::default(),
        NullRenderer::default(),
    )
    .expect("chart init");

    for _ in 0..3 {
        chart.pointer_down(10.0, 265.0).expect("down");
        chart.pointer_up(10.0, 265.000_001).expect("up");

        let y = chart.y_scale().domain();
        assert!(y.min() <= y.max());
        assert!(y.min() >= 0.0 && y.max() <= 1_000_000.0);
        assert!(chart.renderer().last_text_count < 100);
    }
    assert_eq!(chart.active_gesture(), ActiveGesture::Idle);
}

#[test]
fn y_brush_selects_value_band_in_ascending_order() {
    let mut chart = chart();
    let subscription = chart.subscribe_selections();
    let x_before = chart.x_scale().domain();

    // Rows 265 and 124 hold values 50 and 80; drag bottom-up.
    chart.pointer_down(10.0, 265.0).expect("down");
    assert_eq!(chart.active_gesture(), ActiveGesture::YBrush);
    chart.pointer_move(10.0, 124.0).expect("move");

    let labels = chart.y_brush_labels().expect("labels while dragging");
    assert_eq!(labels.north, "80");
    assert_eq!(labels.south, "50");
    assert_abs_diff_eq!(labels.north_y, 124.0, epsilon = 1e-9);
    assert_abs_diff_eq!(labels.south_y, 265.0, epsilon = 1e-9);

    let propagation = chart.pointer_up(10.0, 124.0).expect("up");
    assert_eq!(propagation, Propagation::Stop);
    assert!(chart.y_brush_labels().is_none());
    assert!(chart.y_brush_selection().is_none());

    let y = chart.y_scale().domain();
    assert_abs_diff_eq!(y.min(), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y.max(), 80.0, epsilon = 1e-9);
    assert_eq!(chart.x_scale().domain(), x_before);
    assert_eq!(subscription.drain().len(), 1);
}

#[test]
fn y_brush_redraws_only_the_value_axis() {
    let mut chart = chart();
    let before = chart.stats();

    chart.pointer_down(10.0, 265.0).expect("down");
    chart.pointer_up(10.0, 124.0).expect("up");

    let after = chart.stats();
    assert_eq!(after.y_axis_redraws, before.y_axis_redraws + 1);
    assert_eq!(after.x_axis_redraws, before.x_axis_redraws);
    assert_eq!(after.line_redraws, before.line_redraws + 1);
}

#[test]
fn brush_keeps_capture_outside_the_plot() {
    let mut chart = chart();
    chart.pointer_down(198.0, 200.0).expect("down");
    chart.pointer_move(2_000.0, 900.0).expect("move outside view");
    chart.pointer_up(2_000.0, 900.0).expect("up outside view");

    // The brush is clamped to the plot, so it ends at the latest sample.
    let x = chart.x_scale().domain();
    assert_abs_diff_eq!(x.min(), 20_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(x.max(), 100_000.0, epsilon = 1e-6);
}

#[test]
fn pointer_down_outside_interactive_regions_is_ignored() {
    let mut chart = chart();
    chart.pointer_down(5.0, 540.0).expect("down in corner");
    assert_eq!(chart.active_gesture(), ActiveGesture::Idle);
    assert_eq!(
        chart.pointer_up(5.0, 540.0).expect("up"),
        Propagation::Continue
    );
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut chart = chart();
    assert!(chart.pointer_down(f64::NAN, 10.0).is_err());
    assert!(chart.pointer_move(10.0, f64::INFINITY).is_err());
}

#[test]
fn brush_overlay_is_rendered_while_dragging() {
    let mut chart = chart();
    let idle_rects = chart.renderer().last_rect_count;

    chart.pointer_down(198.0, 200.0).expect("down");
    chart.pointer_move(534.0, 200.0).expect("move");
    assert_eq!(chart.renderer().last_rect_count, idle_rects + 1);

    chart.pointer_up(534.0, 200.0).expect("up");
    assert_eq!(chart.renderer().last_rect_count, idle_rects);
}
