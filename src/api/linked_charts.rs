use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Dataset;
use crate::error::ChartResult;
use crate::interaction::{DoubleClick, GestureController};
use crate::render::Renderer;
use crate::sync::{RegionRequest, Selection, Subscription};

use super::{ChartView, LinkedChartsConfig, MinimapView, Propagation};

/// View an input event is addressed to, in that view's local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewTarget {
    Chart,
    Minimap,
}

/// Host input fed to [`LinkedCharts::handle`].
///
/// Clicks are document-level and carry their event timestamp. A host sends
/// the `Click` of a press after its `PointerUp`. `Tick` lets a pending click
/// burst close when no further input arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { target: ViewTarget, x: f64, y: f64 },
    PointerMove { target: ViewTarget, x: f64, y: f64 },
    PointerUp { target: ViewTarget, x: f64, y: f64 },
    PointerLeave { target: ViewTarget },
    Wheel { target: ViewTarget, x: f64, y: f64, delta_y: f64 },
    Click { at: Duration },
    Tick { now: Duration },
}

/// What one [`LinkedCharts::handle`] call caused downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub resets: usize,
    pub regions_applied: usize,
    pub selections_forwarded: usize,
    pub click_suppressed: bool,
}

/// A chart and its minimap kept in sync.
///
/// Neither view holds a reference to the other. After every input the
/// coordinator drains, in order: double clicks (reset the chart), region
/// requests (applied to the chart without republishing), then chart
/// selections (move the minimap brush without emitting a region). Each step
/// only feeds steps after it, so one input settles in a single pass.
pub struct LinkedCharts<C: Renderer, M: Renderer> {
    chart: ChartView<C>,
    minimap: MinimapView<M>,
    gestures: GestureController,
    double_clicks: Subscription<DoubleClick>,
    regions: Subscription<RegionRequest>,
    selections: Subscription<Selection>,
    suppress_next_click: bool,
}

impl<C: Renderer, M: Renderer> LinkedCharts<C, M> {
    /// Builds both views over `dataset` and places the minimap brush on the
    /// chart's initial visible domains.
    pub fn new(
        dataset: Dataset,
        config: LinkedChartsConfig,
        chart_renderer: C,
        minimap_renderer: M,
    ) -> ChartResult<Self> {
        config.validate()?;
        let mut chart = ChartView::new(dataset.clone(), config.chart, chart_renderer)?;
        let mut minimap = MinimapView::new(dataset, config.minimap, minimap_renderer)?;
        let mut gestures = GestureController::new(config.gestures.double_click_window())?;

        let double_clicks = gestures.subscribe();
        let regions = minimap.subscribe_regions();
        let selections = chart.subscribe_selections();

        let mut linked = Self {
            chart,
            minimap,
            gestures,
            double_clicks,
            regions,
            selections,
            suppress_next_click: false,
        };
        linked.chart.report_current_bounds();
        linked.drain()?;
        debug!("linked charts ready");
        Ok(linked)
    }

    #[must_use]
    pub fn chart(&self) -> &ChartView<C> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ChartView<C> {
        &mut self.chart
    }

    #[must_use]
    pub fn minimap(&self) -> &MinimapView<M> {
        &self.minimap
    }

    pub fn minimap_mut(&mut self) -> &mut MinimapView<M> {
        &mut self.minimap
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// Routes one input event and settles every resulting update.
    pub fn handle(&mut self, event: InputEvent) -> ChartResult<SyncReport> {
        let mut click_suppressed = false;
        match event {
            InputEvent::PointerDown { target, x, y } => {
                // A press starts a new click; a suppression whose click never
                // arrived must not swallow this one.
                self.suppress_next_click = false;
                match target {
                    ViewTarget::Chart => self.chart.pointer_down(x, y)?,
                    ViewTarget::Minimap => self.minimap.pointer_down(x, y)?,
                }
            }
            InputEvent::PointerMove { target, x, y } => match target {
                ViewTarget::Chart => self.chart.pointer_move(x, y)?,
                ViewTarget::Minimap => self.minimap.pointer_move(x, y)?,
            },
            InputEvent::PointerUp { target, x, y } => match target {
                ViewTarget::Chart => {
                    if self.chart.pointer_up(x, y)? == Propagation::Stop {
                        self.suppress_next_click = true;
                    }
                }
                ViewTarget::Minimap => {
                    self.minimap.pointer_up(x, y)?;
                }
            },
            InputEvent::PointerLeave { target } => match target {
                ViewTarget::Chart => self.chart.pointer_leave()?,
                ViewTarget::Minimap => {}
            },
            InputEvent::Wheel {
                target,
                x,
                y,
                delta_y,
            } => match target {
                ViewTarget::Chart => self.chart.wheel(x, y, delta_y)?,
                ViewTarget::Minimap => {}
            },
            InputEvent::Click { at } => {
                if self.suppress_next_click {
                    // The click completing a brush on the chart never reaches
                    // the document.
                    self.suppress_next_click = false;
                    click_suppressed = true;
                    trace!("click after brush end suppressed");
                } else {
                    self.gestures.on_click(at);
                }
            }
            InputEvent::Tick { now } => {
                self.gestures.tick(now);
            }
        }

        let mut report = self.drain()?;
        report.click_suppressed = click_suppressed;
        Ok(report)
    }

    /// Applies every pending cross-view update in protocol order.
    fn drain(&mut self) -> ChartResult<SyncReport> {
        let mut report = SyncReport::default();

        for double_click in self.double_clicks.drain() {
            debug!(
                second_ms = double_click.second_click_at.as_millis() as u64,
                "double click resets chart"
            );
            self.chart.reset()?;
            report.resets += 1;
        }
        for region in self.regions.drain() {
            self.chart.apply_region(&region)?;
            report.regions_applied += 1;
        }
        for selection in self.selections.drain() {
            self.minimap.move_brush_to(&selection)?;
            report.selections_forwarded += 1;
        }
        Ok(report)
    }
}
