use std::time::Duration;

use chart_minimap::ChartError;
use chart_minimap::api::{
    ChartView, ChartViewConfig, LinkedChartsConfig, MinimapConfig, ResetWindow,
};
use chart_minimap::core::{DataPoint, Dataset, Layout, Margin, ScaleExtent, Series};
use chart_minimap::render::{Color, NullRenderer};

#[test]
fn default_config_round_trips_through_json() {
    let config = LinkedChartsConfig::default();
    let json = config.to_json_pretty().expect("serialize");
    let parsed = LinkedChartsConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = LinkedChartsConfig::from_json_str(
        r#"{
            "chart": {
                "reset_window": {"kind": "most_recent", "fraction": 0.25},
                "dedupe_selections": true
            },
            "gestures": {"double_click_window_ms": 400}
        }"#,
    )
    .expect("parse");

    assert_eq!(
        parsed.chart.reset_window,
        ResetWindow::MostRecent { fraction: 0.25 }
    );
    assert!(parsed.chart.dedupe_selections);
    assert_eq!(parsed.chart.layout, ChartViewConfig::default().layout);
    assert_eq!(parsed.minimap, MinimapConfig::default());
    assert_eq!(parsed.gestures.double_click_window(), Duration::from_millis(400));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let zero_window = LinkedChartsConfig::from_json_str(
        r#"{"gestures": {"double_click_window_ms": 0}}"#,
    );
    assert!(matches!(zero_window, Err(ChartError::InvalidConfig(_))));

    let bad_fraction = LinkedChartsConfig::from_json_str(
        r#"{"chart": {"reset_window": {"kind": "most_recent", "fraction": 1.5}}}"#,
    );
    assert!(matches!(bad_fraction, Err(ChartError::InvalidConfig(_))));

    let malformed = LinkedChartsConfig::from_json_str("{");
    assert!(matches!(malformed, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn layout_without_plot_area_is_rejected() {
    let config = ChartViewConfig::new(Layout::new(
        50.0,
        50.0,
        Margin::new(30.0, 30.0, 30.0, 30.0),
    ));
    let dataset = Dataset::new(vec![Series::new(vec![DataPoint::new(0.0, 1.0)])]);

    let result = ChartView::new(dataset, config, NullRenderer::default());
    assert!(matches!(result, Err(ChartError::InvalidLayout { .. })));
}

#[test]
fn invalid_style_values_are_rejected() {
    let mut config = ChartViewConfig::default();
    config.wheel_zoom_sensitivity = 0.0;
    assert!(config.validate().is_err());

    let mut config = ChartViewConfig::default();
    config.brush_color = Color::rgba(0.0, 0.0, 0.0, 2.0);
    assert!(config.validate().is_err());
}

#[test]
fn minimap_line_color_is_validated() {
    let mut config = MinimapConfig::default();
    config.line_style.color = Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
    config.validate().expect("valid config");

    config.line_style.color = Color::rgb(0.0, -0.1, 0.0);
    assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn zoom_scale_extent_must_bracket_identity() {
    let mut config = ChartViewConfig::default();
    config.zoom_scale_extent = ScaleExtent {
        min_k: 2.0,
        max_k: 10.0,
    };
    assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));

    let json = r#"{"chart": {"zoom_scale_extent": {"min_k": 0.5, "max_k": 4.0}}}"#;
    let loaded = LinkedChartsConfig::from_json_str(json).expect("partial config");
    assert_eq!(loaded.chart.zoom_scale_extent.max_k, 4.0);
}

#[test]
fn empty_dataset_still_builds_views() {
    let chart = ChartView::new(
        Dataset::default(),
        ChartViewConfig::default(),
        NullRenderer::default(),
    )
    .expect("empty chart");
    assert!(chart.full_domains().x.is_degenerate());
    assert_eq!(chart.renderer().last_path_count, 0);
}
