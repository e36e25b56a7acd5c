use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Domain, Layout, Margin, ScaleExtent};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_DOUBLE_CLICK_WINDOW;
use crate::render::Color;

use super::validation::{validate_color, validate_positive};

/// Domain the chart returns to on reset, and starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResetWindow {
    /// The full data extent.
    #[default]
    Full,
    /// The trailing `fraction` of the full time extent, anchored at the
    /// latest sample. The value domain stays full.
    MostRecent { fraction: f64 },
}

impl ResetWindow {
    /// Time domain selected by this window out of the full extent.
    #[must_use]
    pub fn apply(self, full: Domain) -> Domain {
        match self {
            Self::Full => full,
            Self::MostRecent { fraction } => full.most_recent(fraction),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Self::MostRecent { fraction } = self {
            if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                return Err(ChartError::InvalidConfig(
                    "reset window fraction must be in (0, 1]".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Stroke used for every series path of a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: default_line_color(),
            width: 1.5,
        }
    }
}

impl LineStyle {
    pub fn validate(self) -> ChartResult<Self> {
        validate_color("line color", self.color)?;
        validate_positive("line width", self.width)?;
        Ok(self)
    }
}

/// Configuration of the main chart view.
///
/// Serializable so hosts can persist and load the setup; every field has a
/// default so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartViewConfig {
    pub layout: Layout,
    pub reset_window: ResetWindow,
    pub x_tick_spacing_px: f64,
    pub y_tick_spacing_px: f64,
    pub line_style: LineStyle,
    pub axis_color: Color,
    pub grid_color: Color,
    pub font_size_px: f64,
    pub crosshair_color: Color,
    pub crosshair_time_format: String,
    pub crosshair_value_precision: usize,
    pub brush_color: Color,
    pub brush_label_height_px: f64,
    pub brush_label_width_px: f64,
    pub brush_label_color: Color,
    pub brush_label_text_color: Color,
    pub highlight_color: Color,
    /// Exponent applied per wheel delta unit: `factor = 2^(-delta * sensitivity)`.
    pub wheel_zoom_sensitivity: f64,
    /// Bounds on the wheel zoom scale between two rebases of the zoom.
    pub zoom_scale_extent: ScaleExtent,
    pub dedupe_selections: bool,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            layout: Layout::new(900.0, 550.0, Margin::new(30.0, 30.0, 50.0, 30.0)),
            reset_window: ResetWindow::Full,
            x_tick_spacing_px: 80.0,
            y_tick_spacing_px: 70.0,
            line_style: LineStyle::default(),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            grid_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            font_size_px: 11.0,
            crosshair_color: Color::rgb(0.827, 0.827, 0.827),
            crosshair_time_format: "%H:%M:%S".to_owned(),
            crosshair_value_precision: 2,
            brush_color: Color::rgba(0.467, 0.467, 0.467, 0.3),
            brush_label_height_px: 25.0,
            brush_label_width_px: 35.0,
            brush_label_color: Color::rgba(94.0 / 255.0, 164.0 / 255.0, 203.0 / 255.0, 0.8),
            brush_label_text_color: Color::rgb(1.0, 1.0, 1.0),
            highlight_color: Color::rgba(0.2, 0.6, 0.8, 0.15),
            wheel_zoom_sensitivity: 0.002,
            zoom_scale_extent: ScaleExtent::default(),
            dedupe_selections: false,
        }
    }
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reset_window(mut self, reset_window: ResetWindow) -> Self {
        self.reset_window = reset_window;
        self
    }

    #[must_use]
    pub fn with_selection_dedupe(mut self, enabled: bool) -> Self {
        self.dedupe_selections = enabled;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;
        self.reset_window.validate()?;
        validate_positive("x tick spacing", self.x_tick_spacing_px)?;
        validate_positive("y tick spacing", self.y_tick_spacing_px)?;
        validate_positive("font size", self.font_size_px)?;
        validate_positive("brush label height", self.brush_label_height_px)?;
        validate_positive("brush label width", self.brush_label_width_px)?;
        validate_positive("wheel zoom sensitivity", self.wheel_zoom_sensitivity)?;
        self.zoom_scale_extent.validate()?;
        self.line_style.validate()?;
        for (name, color) in [
            ("axis color", self.axis_color),
            ("grid color", self.grid_color),
            ("crosshair color", self.crosshair_color),
            ("brush color", self.brush_color),
            ("brush label color", self.brush_label_color),
            ("brush label text color", self.brush_label_text_color),
            ("highlight color", self.highlight_color),
        ] {
            validate_color(name, color)?;
        }
        if self.crosshair_time_format.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "crosshair time format must not be empty".to_owned(),
            ));
        }
        if self.crosshair_value_precision > 12 {
            return Err(ChartError::InvalidConfig(
                "crosshair value precision must be <= 12".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration of the minimap overview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub layout: Layout,
    pub line_style: LineStyle,
    pub x_tick_spacing_px: f64,
    pub axis_color: Color,
    pub font_size_px: f64,
    pub brush_color: Color,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            layout: Layout::new(900.0, 80.0, Margin::new(0.0, 30.0, 0.0, 30.0)),
            line_style: LineStyle {
                color: Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0),
                width: 1.5,
            },
            x_tick_spacing_px: 80.0,
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            font_size_px: 11.0,
            brush_color: Color::rgba(0.467, 0.467, 0.467, 0.3),
        }
    }
}

impl MinimapConfig {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;
        self.line_style.validate()?;
        validate_positive("x tick spacing", self.x_tick_spacing_px)?;
        validate_positive("font size", self.font_size_px)?;
        validate_color("axis color", self.axis_color)?;
        validate_color("brush color", self.brush_color)?;
        Ok(())
    }
}

/// Document-level gesture settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub double_click_window_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_click_window_ms: DEFAULT_DOUBLE_CLICK_WINDOW.as_millis() as u64,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn double_click_window(self) -> Duration {
        Duration::from_millis(self.double_click_window_ms)
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.double_click_window_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "double click window must be > 0 ms".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Full setup of a chart linked to its minimap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LinkedChartsConfig {
    pub chart: ChartViewConfig,
    pub minimap: MinimapConfig,
    pub gestures: GestureConfig,
}

impl LinkedChartsConfig {
    pub fn validate(&self) -> ChartResult<()> {
        self.chart.validate()?;
        self.minimap.validate()?;
        self.gestures.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_line_color() -> Color {
    Color::rgb(0.2, 0.6, 0.8)
}
