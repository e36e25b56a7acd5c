use approx::assert_abs_diff_eq;
use chart_minimap::api::{MinimapConfig, MinimapView};
use chart_minimap::core::{DataPoint, Dataset, Domain, Series};
use chart_minimap::render::NullRenderer;
use chart_minimap::sync::Selection;

fn ramp() -> Dataset {
    let points = (0..=100)
        .map(|i| DataPoint::new(f64::from(i) * 1_000.0, f64::from(i)))
        .collect();
    Dataset::new(vec![Series::new(points)])
}

fn minimap() -> MinimapView<NullRenderer> {
    MinimapView::new(ramp(), MinimapConfig::default(), NullRenderer::default())
        .expect("minimap init")
}

#[test]
fn minimap_scales_cover_full_data_extent() {
    let minimap = minimap();
    assert_eq!(minimap.x_scale().domain().bounds(), (0.0, 100_000.0));
    assert_eq!(minimap.y_scale().domain().bounds(), (0.0, 100.0));
    assert_eq!(minimap.x_scale().range(), (30.0, 870.0));
    assert_eq!(minimap.y_scale().range(), (80.0, 0.0));
    assert!(minimap.brush_selection().is_none());
}

#[test]
fn released_brush_requests_region_with_ascending_values() {
    let mut minimap = minimap();
    let subscription = minimap.subscribe_regions();

    minimap.pointer_down(198.0, 20.0).expect("down");
    minimap.pointer_move(534.0, 60.0).expect("move");
    let region = minimap
        .pointer_up(534.0, 60.0)
        .expect("up")
        .expect("region request");

    assert_abs_diff_eq!(region.x_domain.min(), 20_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(region.x_domain.max(), 60_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(region.y_domain.min(), 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(region.y_domain.max(), 75.0, epsilon = 1e-9);
    assert_eq!(subscription.drain(), vec![region]);
    assert_eq!(minimap.stats().publishes, 1);

    // The rectangle stays where it was released and the scales never move.
    let rect = minimap.brush_selection().expect("brush kept");
    assert_eq!(rect.x_interval(), (198.0, 534.0));
    assert_eq!(minimap.x_scale().domain().bounds(), (0.0, 100_000.0));
}

#[test]
fn flat_brush_requests_nothing() {
    let mut minimap = minimap();
    let subscription = minimap.subscribe_regions();

    minimap.pointer_down(198.0, 20.0).expect("down");
    let region = minimap.pointer_up(534.0, 20.0).expect("up");

    assert!(region.is_none());
    assert_eq!(subscription.pending(), 0);
    assert_eq!(minimap.stats().publishes, 0);
}

#[test]
fn moving_brush_from_selection_never_requests_region() {
    let mut minimap = minimap();
    let subscription = minimap.subscribe_regions();
    let selection = Selection::new(
        Domain::new(20_000.0, 60_000.0).expect("x"),
        Domain::new(25.0, 75.0).expect("y"),
    );

    minimap.move_brush_to(&selection).expect("move brush");

    assert_eq!(subscription.pending(), 0);
    assert_eq!(minimap.stats().publishes, 0);
    let rect = minimap.brush_selection().expect("brush placed");
    assert_abs_diff_eq!(rect.x0, 198.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.x1, 534.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.y0, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.y1, 60.0, epsilon = 1e-9);
}

#[test]
fn selection_beyond_extent_is_clipped() {
    let mut minimap = minimap();
    let selection = Selection::new(
        Domain::new(-10_000.0, 90_000.0).expect("x"),
        Domain::new(0.0, 100.0).expect("y"),
    );
    minimap.move_brush_to(&selection).expect("move brush");

    let rect = minimap.brush_selection().expect("clipped brush");
    assert_eq!(rect.x0, 30.0);
    assert_abs_diff_eq!(rect.x1, 786.0, epsilon = 1e-9);

    let outside = Selection::new(
        Domain::new(200_000.0, 300_000.0).expect("x"),
        Domain::new(0.0, 100.0).expect("y"),
    );
    minimap.move_brush_to(&outside).expect("move brush");
    assert!(minimap.brush_selection().is_none());
}

#[test]
fn dragging_placed_brush_moves_it() {
    let mut minimap = minimap();
    let selection = Selection::new(
        Domain::new(20_000.0, 60_000.0).expect("x"),
        Domain::new(0.0, 100.0).expect("y"),
    );
    minimap.move_brush_to(&selection).expect("move brush");

    minimap.pointer_down(300.0, 40.0).expect("grab");
    let region = minimap
        .pointer_up(384.0, 40.0)
        .expect("release")
        .expect("region");

    assert_abs_diff_eq!(region.x_domain.min(), 30_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(region.x_domain.max(), 70_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(region.y_domain.min(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(region.y_domain.max(), 100.0, epsilon = 1e-9);
}

#[test]
fn brush_rect_is_rendered_over_series() {
    let mut minimap = minimap();
    assert_eq!(minimap.renderer().last_rect_count, 0);
    assert_eq!(minimap.renderer().last_path_count, 1);

    let selection = Selection::new(
        Domain::new(20_000.0, 60_000.0).expect("x"),
        Domain::new(0.0, 100.0).expect("y"),
    );
    minimap.move_brush_to(&selection).expect("move brush");
    assert_eq!(minimap.renderer().last_rect_count, 1);
}
