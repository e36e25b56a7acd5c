use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Dataset, Domain, FullDomains, Layout, ScalePair, TimeScale, ValueScale, ZoomTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    ActiveGesture, AxisHighlight, Brush, BrushDimension, BrushRect, CrosshairState,
    InteractionState,
};
use crate::render::{RenderFrame, Renderer};
use crate::sync::{RegionRequest, Selection, SelectionChannel, Subscription, SubscriptionId};

use super::axis_label_format::{ValueLabelFormat, format_crosshair_time, format_crosshair_value};
use super::axis_render_frame_builder::{AxisStyle, build_time_axis_frame, build_value_axis_frame};
use super::overlay_render_frame_builder::{
    append_axis_highlights, append_brush_selection, append_crosshair, append_y_brush_labels,
};
use super::series_render_frame_builder::build_series_frame;
use super::{ChartViewConfig, ViewStats};

/// Whether the input event that ended a gesture may continue to
/// document-level listeners (the double-click detector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Floating value labels shown next to the Y brush handles while dragging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YBrushLabels {
    pub north: String,
    pub north_y: f64,
    pub south: String,
    pub south_y: f64,
}

/// Main time-series chart.
///
/// Owns its scales and is the only writer of them. Every mutation of the
/// visible domain that originates here (brush, zoom, reset) is redrawn and
/// then published on the selection channel; domains applied from outside via
/// [`apply_region`](Self::apply_region) are redrawn but not published.
pub struct ChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartViewConfig,
    pub(super) dataset: Dataset,
    pub(super) full_domains: FullDomains,
    pub(super) reset_domains: FullDomains,
    pub(super) scales: ScalePair,
    pub(super) zoom: ZoomTransform,
    pub(super) zoom_base: TimeScale,
    pub(super) x_brush: Brush,
    pub(super) y_brush: Brush,
    pub(super) interaction: InteractionState,
    pub(super) selections: SelectionChannel,
    pub(super) stats: ViewStats,
    series_frame: RenderFrame,
    x_axis_frame: RenderFrame,
    y_axis_frame: RenderFrame,
}

impl<R: Renderer> ChartView<R> {
    /// Computes the full-data domains, builds both scales over the plot
    /// bounds and draws lines and axes once.
    ///
    /// The visible domains start at the reset target: the configured reset
    /// window of the time extent and the niced value domain.
    pub fn new(dataset: Dataset, config: ChartViewConfig, renderer: R) -> ChartResult<Self> {
        config.validate()?;
        let layout = config.layout;
        let bounds = layout.bounds();

        let full_domains = FullDomains::from_dataset(&dataset)?;
        let mut scales = ScalePair::for_plot(full_domains.x, full_domains.y, bounds)?;
        let reset_domains = FullDomains {
            x: config.reset_window.apply(full_domains.x),
            y: scales.y().domain(),
        };
        scales.set_domains(reset_domains.x, reset_domains.y);

        let x_brush = Brush::new(
            BrushDimension::X,
            BrushRect::from_corners((bounds.x_min, bounds.y_max), (bounds.x_max, bounds.y_min)),
        );
        // The Y brush reaches from the view's left edge so the gutter beside
        // the axis labels can start it.
        let y_brush = Brush::new(
            BrushDimension::Y,
            BrushRect::from_corners((0.0, 0.0), (bounds.x_max, bounds.y_min)),
        );
        let selections = SelectionChannel::new().with_dedupe(config.dedupe_selections);

        let mut view = Self {
            renderer,
            config,
            dataset,
            full_domains,
            reset_domains,
            scales,
            zoom: ZoomTransform::IDENTITY,
            zoom_base: scales.x(),
            x_brush,
            y_brush,
            interaction: InteractionState::default(),
            selections,
            stats: ViewStats::default(),
            series_frame: RenderFrame::new(layout),
            x_axis_frame: RenderFrame::new(layout),
            y_axis_frame: RenderFrame::new(layout),
        };
        view.rebuild_lines();
        view.rebuild_x_axis();
        view.rebuild_y_axis();
        view.submit()?;

        debug!(
            series = view.dataset.len(),
            x_min = reset_domains.x.min(),
            x_max = reset_domains.x.max(),
            y_min = reset_domains.y.min(),
            y_max = reset_domains.y.max(),
            "chart view created"
        );
        Ok(view)
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Data extents: every timestamp for X, `[0, max value]` for Y.
    #[must_use]
    pub fn full_domains(&self) -> FullDomains {
        self.full_domains
    }

    /// Domains restored by [`reset`](Self::reset).
    #[must_use]
    pub fn reset_domains(&self) -> FullDomains {
        self.reset_domains
    }

    #[must_use]
    pub fn scales(&self) -> ScalePair {
        self.scales
    }

    #[must_use]
    pub fn x_scale(&self) -> TimeScale {
        self.scales.x()
    }

    #[must_use]
    pub fn y_scale(&self) -> ValueScale {
        self.scales.y()
    }

    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        self.zoom
    }

    #[must_use]
    pub fn x_brush_selection(&self) -> Option<BrushRect> {
        self.x_brush.selection().filter(|rect| rect.width() > 0.0)
    }

    #[must_use]
    pub fn y_brush_selection(&self) -> Option<BrushRect> {
        self.y_brush.selection().filter(|rect| rect.height() > 0.0)
    }

    #[must_use]
    pub fn active_gesture(&self) -> ActiveGesture {
        self.interaction.gesture()
    }

    #[must_use]
    pub fn crosshair(&self) -> CrosshairState {
        self.interaction.crosshair()
    }

    /// Time and value labels of the visible crosshair.
    #[must_use]
    pub fn crosshair_labels(&self) -> Option<(String, String)> {
        let crosshair = self.interaction.crosshair();
        if !crosshair.visible {
            return None;
        }
        Some((
            format_crosshair_time(crosshair.time, &self.config.crosshair_time_format),
            format_crosshair_value(crosshair.value, self.config.crosshair_value_precision),
        ))
    }

    #[must_use]
    pub fn axis_highlight(&self) -> AxisHighlight {
        self.interaction.highlight()
    }

    /// Handle labels of a Y brush drag in progress; `None` when idle or when
    /// the brush is empty.
    #[must_use]
    pub fn y_brush_labels(&self) -> Option<YBrushLabels> {
        if !self.y_brush.is_dragging() {
            return None;
        }
        let (top, bottom) = self.y_brush_selection()?.y_interval();
        let scale = self.scales.y();
        let format = ValueLabelFormat::for_axis(scale.domain());
        Some(YBrushLabels {
            north: format.format(scale.pixel_to_value(top)),
            north_y: top,
            south: format.format(scale.pixel_to_value(bottom)),
            south_y: bottom,
        })
    }

    #[must_use]
    pub fn stats(&self) -> ViewStats {
        self.stats
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn subscribe_selections(&mut self) -> Subscription<Selection> {
        self.selections.subscribe()
    }

    pub fn unsubscribe_selections(&mut self, id: SubscriptionId) -> bool {
        self.selections.unsubscribe(id)
    }

    /// Snapshot of the visible domains.
    #[must_use]
    pub fn current_selection(&self) -> Selection {
        let (x, y) = self.scales.domains();
        Selection::new(x, y)
    }

    /// Rebuilds every series path from the current scales and submits.
    pub fn draw_lines(&mut self) -> ChartResult<()> {
        self.rebuild_lines();
        self.submit()
    }

    /// Rebuilds both axes from the current scales and submits.
    pub fn draw_axes(&mut self) -> ChartResult<()> {
        self.rebuild_x_axis();
        self.rebuild_y_axis();
        self.submit()
    }

    /// Publishes the current visible domains on the selection channel.
    pub fn report_current_bounds(&mut self) -> Selection {
        let selection = self.current_selection();
        let delivered = self.selections.publish(selection);
        self.stats.publishes += 1;
        debug!(
            delivered,
            x_min = selection.x_selection.min(),
            x_max = selection.x_selection.max(),
            "selection published"
        );
        selection
    }

    /// Restores the reset domains, drops any zoom and brush, redraws and
    /// publishes.
    pub fn reset(&mut self) -> ChartResult<()> {
        let target = self.reset_domains;
        self.scales.set_domains(target.x, target.y);
        self.rebase_zoom();
        self.stats.domain_mutations += 1;
        self.x_brush.clear();
        self.y_brush.clear();

        self.rebuild_lines();
        self.rebuild_x_axis();
        self.rebuild_y_axis();
        self.submit()?;
        debug!(x_min = target.x.min(), x_max = target.x.max(), "chart reset");
        self.report_current_bounds();
        Ok(())
    }

    /// Shows the domains requested by a linked overview.
    ///
    /// The request did not originate here, so nothing is published.
    pub fn apply_region(&mut self, region: &RegionRequest) -> ChartResult<()> {
        let finite = region.x_domain.span().is_finite() && region.y_domain.span().is_finite();
        debug_assert!(finite, "region request spans must be finite");
        if !finite {
            return Err(ChartError::InvalidData(
                "region request spans must be finite".to_owned(),
            ));
        }
        self.scales.set_domains(region.x_domain, region.y_domain);
        self.rebase_zoom();
        self.stats.domain_mutations += 1;

        self.rebuild_lines();
        self.rebuild_x_axis();
        self.rebuild_y_axis();
        self.submit()?;
        debug!(
            x_min = region.x_domain.min(),
            x_max = region.x_domain.max(),
            y_min = region.y_domain.min(),
            y_max = region.y_domain.max(),
            "region applied"
        );
        Ok(())
    }

    pub(super) fn set_x_domain(&mut self, domain: Domain) {
        self.scales.x_mut().set_domain(domain);
        self.rebase_zoom();
        self.stats.domain_mutations += 1;
    }

    pub(super) fn set_y_domain(&mut self, domain: Domain) {
        self.scales.y_mut().set_domain(domain);
        self.stats.domain_mutations += 1;
    }

    /// Makes the current X scale the base of subsequent zoom gestures.
    fn rebase_zoom(&mut self) {
        self.zoom = ZoomTransform::IDENTITY;
        self.zoom_base = self.scales.x();
    }

    pub(super) fn rebuild_lines(&mut self) {
        self.series_frame = build_series_frame(
            self.config.layout,
            &self.dataset,
            &self.scales,
            self.config.line_style,
        );
        self.stats.line_redraws += 1;
    }

    pub(super) fn rebuild_x_axis(&mut self) {
        self.x_axis_frame = build_time_axis_frame(
            self.config.layout,
            self.scales.x(),
            self.config.x_tick_spacing_px,
            self.axis_style(),
        );
        self.stats.x_axis_redraws += 1;
    }

    pub(super) fn rebuild_y_axis(&mut self) {
        self.y_axis_frame = build_value_axis_frame(
            self.config.layout,
            self.scales.y(),
            self.config.y_tick_spacing_px,
            self.axis_style(),
        );
        self.stats.y_axis_redraws += 1;
    }

    fn axis_style(&self) -> AxisStyle {
        AxisStyle {
            color: self.config.axis_color,
            grid_color: self.config.grid_color,
            font_size_px: self.config.font_size_px,
        }
    }

    /// Composes the cached scene parts with the live overlays and hands the
    /// frame to the renderer.
    pub(super) fn submit(&mut self) -> ChartResult<()> {
        let layout = self.config.layout;
        let mut frame = RenderFrame::new(layout);
        append_axis_highlights(
            &mut frame,
            layout,
            self.interaction.highlight(),
            self.config.highlight_color,
        );
        frame.extend(self.y_axis_frame.clone());
        frame.extend(self.x_axis_frame.clone());
        frame.extend(self.series_frame.clone());

        if let Some(selection) = self.x_brush_selection() {
            append_brush_selection(&mut frame, selection, self.config.brush_color);
        }
        if let Some(selection) = self.y_brush_selection() {
            append_brush_selection(&mut frame, selection, self.config.brush_color);
        }
        if let Some(labels) = self.y_brush_labels() {
            append_y_brush_labels(&mut frame, &labels, &self.config);
        }
        if let Some(labels) = self.crosshair_labels() {
            append_crosshair(
                &mut frame,
                layout,
                self.interaction.crosshair(),
                labels,
                &self.config,
            );
        }

        self.renderer.render(&frame)?;
        self.stats.frames_rendered += 1;
        Ok(())
    }
}
