use tracing::{debug, trace};

use crate::core::{Dataset, FullDomains, Layout, ScalePair, TimeScale, ValueScale};
use crate::error::ChartResult;
use crate::interaction::{Brush, BrushDimension, BrushRect};
use crate::render::{RenderFrame, Renderer};
use crate::sync::{RegionChannel, RegionRequest, Selection, Subscription, SubscriptionId};

use super::axis_render_frame_builder::{AxisStyle, build_time_axis_frame};
use super::overlay_render_frame_builder::append_brush_selection;
use super::series_render_frame_builder::build_series_frame;
use super::validation::validate_pointer;
use super::{MinimapConfig, ViewStats};

/// Overview of the whole dataset with one 2-D brush.
///
/// Its scales are fixed to the full data extent for its lifetime. Releasing
/// the brush emits a [`RegionRequest`] on the region channel; positioning the
/// brush from a chart selection with [`move_brush_to`](Self::move_brush_to)
/// never does.
pub struct MinimapView<R: Renderer> {
    renderer: R,
    config: MinimapConfig,
    dataset: Dataset,
    scales: ScalePair,
    brush: Brush,
    regions: RegionChannel,
    stats: ViewStats,
    series_frame: RenderFrame,
    x_axis_frame: RenderFrame,
}

impl<R: Renderer> MinimapView<R> {
    pub fn new(dataset: Dataset, config: MinimapConfig, renderer: R) -> ChartResult<Self> {
        config.validate()?;
        let layout = config.layout;
        let bounds = layout.bounds();

        let full_domains = FullDomains::from_dataset(&dataset)?;
        let scales = ScalePair::for_plot(full_domains.x, full_domains.y, bounds)?;
        let brush = Brush::new(
            BrushDimension::XY,
            BrushRect::from_corners((bounds.x_min, bounds.y_max), (bounds.x_max, bounds.y_min)),
        );

        let mut view = Self {
            renderer,
            config,
            dataset,
            scales,
            brush,
            regions: RegionChannel::new(),
            stats: ViewStats::default(),
            series_frame: RenderFrame::new(layout),
            x_axis_frame: RenderFrame::new(layout),
        };
        view.series_frame =
            build_series_frame(layout, &view.dataset, &view.scales, view.config.line_style);
        view.stats.line_redraws += 1;
        view.rebuild_x_axis();
        view.submit()?;

        debug!(series = view.dataset.len(), "minimap view created");
        Ok(view)
    }

    #[must_use]
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.config.layout
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

    /// Current brush rectangle, `None` when the brush is empty.
    #[must_use]
    pub fn brush_selection(&self) -> Option<BrushRect> {
        self.brush
            .selection()
            .filter(|rect| rect.width() > 0.0 && rect.height() > 0.0)
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

    pub fn subscribe_regions(&mut self) -> Subscription<RegionRequest> {
        self.regions.subscribe()
    }

    pub fn unsubscribe_regions(&mut self, id: SubscriptionId) -> bool {
        self.regions.unsubscribe(id)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if self.brush.pointer_down(x, y).is_some() {
            self.submit()?;
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if self.brush.pointer_move(x, y).is_some() {
            self.submit()?;
        }
        Ok(())
    }

    /// Finishes a brush drag. A non-empty rectangle is inverted through the
    /// minimap scales (Y reversed) and emitted as a region request; the
    /// rectangle itself stays where it was released.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> ChartResult<Option<RegionRequest>> {
        validate_pointer(x, y)?;
        if !self.brush.is_dragging() {
            return Ok(None);
        }
        self.brush.pointer_move(x, y);
        let Some(selection) = self.brush.pointer_up().and_then(|event| event.selection) else {
            trace!("empty minimap brush ignored");
            return Ok(None);
        };

        let (left, right) = selection.x_interval();
        let (top, bottom) = selection.y_interval();
        let region = RegionRequest::new(
            self.scales.x().invert_interval(left, right)?,
            self.scales.y().invert_screen_interval(top, bottom)?,
        );
        let delivered = self.regions.publish(region);
        self.stats.publishes += 1;

        self.rebuild_x_axis();
        self.submit()?;
        debug!(
            delivered,
            x_min = region.x_domain.min(),
            x_max = region.x_domain.max(),
            "minimap region requested"
        );
        Ok(Some(region))
    }

    /// Positions the brush over `selection` without emitting anything.
    ///
    /// Domains outside the minimap extent are clipped to it; a selection
    /// lying entirely outside clears the brush.
    pub fn move_brush_to(&mut self, selection: &Selection) -> ChartResult<()> {
        let x = self.scales.x();
        let y = self.scales.y();
        let rect = BrushRect::from_corners(
            (
                x.time_to_pixel(selection.x_selection.min()),
                y.value_to_pixel(selection.y_selection.max()),
            ),
            (
                x.time_to_pixel(selection.x_selection.max()),
                y.value_to_pixel(selection.y_selection.min()),
            ),
        );
        self.brush.set_selection(Some(rect));
        trace!(?rect, "minimap brush moved");
        self.submit()
    }

    fn rebuild_x_axis(&mut self) {
        self.x_axis_frame = build_time_axis_frame(
            self.config.layout,
            self.scales.x(),
            self.config.x_tick_spacing_px,
            AxisStyle {
                color: self.config.axis_color,
                grid_color: self.config.axis_color,
                font_size_px: self.config.font_size_px,
            },
        );
        self.stats.x_axis_redraws += 1;
    }

    fn submit(&mut self) -> ChartResult<()> {
        let mut frame = RenderFrame::new(self.config.layout);
        frame.extend(self.series_frame.clone());
        frame.extend(self.x_axis_frame.clone());
        if let Some(selection) = self.brush_selection() {
            append_brush_selection(&mut frame, selection, self.config.brush_color);
        }
        self.renderer.render(&frame)?;
        self.stats.frames_rendered += 1;
        Ok(())
    }
}
