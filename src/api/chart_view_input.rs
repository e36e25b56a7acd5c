use tracing::{debug, trace};

use crate::core::{ViewRegion, ZoomTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ActiveGesture, BrushEvent};
use crate::render::Renderer;

use super::validation::validate_pointer;
use super::{ChartView, Propagation};

impl<R: Renderer> ChartView<R> {
    /// Starts the gesture owning the region under the pointer: X brush over
    /// the plot, Y brush in the left gutter, pan on the X axis strip.
    ///
    /// The gesture keeps pointer capture until [`pointer_up`](Self::pointer_up)
    /// even when the pointer leaves its region.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if self.interaction.gesture() != ActiveGesture::Idle {
            return Ok(());
        }

        let gesture = match self.config.layout.hit_test(x, y) {
            ViewRegion::Plot => self
                .x_brush
                .pointer_down(x, y)
                .map(|_| ActiveGesture::XBrush),
            ViewRegion::YAxisGutter => {
                self.interaction.set_y_axis_highlight(false);
                self.y_brush
                    .pointer_down(x, y)
                    .map(|_| ActiveGesture::YBrush)
            }
            ViewRegion::XAxis => Some(ActiveGesture::XAxisPan { last_x: x }),
            ViewRegion::Outside => None,
        };
        let Some(gesture) = gesture else {
            return Ok(());
        };

        trace!(?gesture, x, y, "chart gesture start");
        self.interaction.set_gesture(gesture);
        self.submit()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        match self.interaction.gesture() {
            ActiveGesture::Idle => self.update_hover(x, y),
            ActiveGesture::XBrush => {
                self.x_brush.pointer_move(x, y);
                self.update_hover(x, y);
            }
            ActiveGesture::YBrush => {
                self.y_brush.pointer_move(x, y);
                self.interaction.set_y_axis_highlight(false);
            }
            ActiveGesture::XAxisPan { last_x } => {
                self.interaction
                    .set_gesture(ActiveGesture::XAxisPan { last_x: x });
                return self.pan_by(x - last_x);
            }
        }
        self.submit()
    }

    /// Ends the active gesture at `(x, y)`.
    ///
    /// Returns [`Propagation::Stop`] when a brush was turned into a domain
    /// change; the host must then keep the originating click away from
    /// document-level listeners.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> ChartResult<Propagation> {
        validate_pointer(x, y)?;
        let gesture = self.interaction.gesture();
        self.interaction.set_gesture(ActiveGesture::Idle);

        match gesture {
            ActiveGesture::Idle => Ok(Propagation::Continue),
            ActiveGesture::XBrush => {
                self.x_brush.pointer_move(x, y);
                let end = self.x_brush.pointer_up();
                self.finish_x_brush(end)
            }
            ActiveGesture::YBrush => {
                self.y_brush.pointer_move(x, y);
                let end = self.y_brush.pointer_up();
                self.finish_y_brush(end)
            }
            ActiveGesture::XAxisPan { last_x } => {
                if x != last_x {
                    self.pan_by(x - last_x)?;
                }
                Ok(Propagation::Continue)
            }
        }
    }

    /// Hides the crosshair and the axis highlights. A gesture in progress
    /// keeps capture.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.interaction.on_pointer_leave();
        self.interaction.set_x_axis_highlight(false);
        self.interaction.set_y_axis_highlight(false);
        self.submit()
    }

    /// Zooms the time axis around `x` when the wheel turns over the X axis
    /// strip; ignored elsewhere. The zoom scale saturates at
    /// `zoom_scale_extent` instead of failing on extreme deltas.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if !delta_y.is_finite() {
            return Err(ChartError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        if self.config.layout.hit_test(x, y) != ViewRegion::XAxis || delta_y == 0.0 {
            return Ok(());
        }

        let factor = 2f64.powf(-delta_y * self.config.wheel_zoom_sensitivity);
        let transform = self
            .zoom
            .scaled_around_within(factor, x, self.config.zoom_scale_extent)?;
        if transform.k == self.zoom.k {
            trace!(k = transform.k, "wheel zoom saturated");
            return Ok(());
        }
        self.apply_zoom(transform)
    }

    fn pan_by(&mut self, delta_px: f64) -> ChartResult<()> {
        if delta_px == 0.0 {
            return Ok(());
        }
        let transform = self.zoom.translated(delta_px)?;
        self.apply_zoom(transform)
    }

    /// One zoom frame: rescale X from the zoom base, redraw axis and lines,
    /// publish.
    fn apply_zoom(&mut self, transform: ZoomTransform) -> ChartResult<()> {
        self.scales
            .x_mut()
            .rescale_from(self.zoom_base, transform)?;
        self.zoom = transform;
        self.stats.domain_mutations += 1;

        self.rebuild_x_axis();
        self.rebuild_lines();
        self.submit()?;
        trace!(k = transform.k, x = transform.x, "zoom frame");
        self.report_current_bounds();
        Ok(())
    }

    fn finish_x_brush(&mut self, end: Option<BrushEvent>) -> ChartResult<Propagation> {
        let Some(selection) = end.and_then(|event| event.selection) else {
            trace!("empty x brush ignored");
            return Ok(Propagation::Continue);
        };

        let (left, right) = selection.x_interval();
        let domain = self.scales.x().invert_interval(left, right)?;
        self.set_x_domain(domain);
        self.rebuild_lines();
        self.rebuild_x_axis();
        self.x_brush.clear();
        self.submit()?;

        debug!(x_min = domain.min(), x_max = domain.max(), "x brush applied");
        self.report_current_bounds();
        Ok(Propagation::Stop)
    }

    fn finish_y_brush(&mut self, end: Option<BrushEvent>) -> ChartResult<Propagation> {
        let Some(selection) = end.and_then(|event| event.selection) else {
            trace!("empty y brush ignored");
            return Ok(Propagation::Continue);
        };

        let (top, bottom) = selection.y_interval();
        let domain = self.scales.y().invert_screen_interval(top, bottom)?;
        self.set_y_domain(domain);
        self.rebuild_lines();
        self.rebuild_y_axis();
        self.y_brush.clear();
        self.submit()?;

        debug!(y_min = domain.min(), y_max = domain.max(), "y brush applied");
        self.report_current_bounds();
        Ok(Propagation::Stop)
    }

    /// Crosshair over the plot, highlight over either axis.
    fn update_hover(&mut self, x: f64, y: f64) {
        let region = self.config.layout.hit_test(x, y);
        if region == ViewRegion::Plot {
            let time = self.scales.x().pixel_to_time(x);
            let value = self.scales.y().pixel_to_value(y);
            self.interaction.on_pointer_move(x, y, time, value);
        } else {
            self.interaction.on_pointer_leave();
        }

        self.interaction
            .set_x_axis_highlight(region == ViewRegion::XAxis);
        self.interaction.set_y_axis_highlight(
            region == ViewRegion::YAxisGutter
                && self.interaction.gesture() != ActiveGesture::YBrush,
        );
    }
}
