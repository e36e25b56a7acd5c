use serde::{Deserialize, Serialize};
use tracing::trace;

/// Axis-aligned pixel rectangle `[[x0, y0], [x1, y1]]` with `x0 <= x1` and
/// `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRect {
    /// Builds a normalized rectangle from two corners in any order.
    #[must_use]
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    #[must_use]
    pub fn x_interval(self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    /// Vertical interval, top row first.
    #[must_use]
    pub fn y_interval(self) -> (f64, f64) {
        (self.y0, self.y1)
    }

    #[must_use]
    fn clamp_point(self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.x0, self.x1), y.clamp(self.y0, self.y1))
    }

    /// Intersection with `other`, `None` when they do not overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let rect = Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (rect.x0 <= rect.x1 && rect.y0 <= rect.y1).then_some(rect)
    }
}

/// Which axes a brush selects along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushDimension {
    X,
    Y,
    XY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushPhase {
    Start,
    Brush,
    End,
}

/// Gesture notification produced only by pointer input.
///
/// `selection` is `None` when the brush is empty (e.g. a click without drag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushEvent {
    pub phase: BrushPhase,
    pub selection: Option<BrushRect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Create { anchor: (f64, f64) },
    Move { origin: (f64, f64), original: BrushRect },
}

/// Rectangular selection gesture over a fixed pixel extent.
///
/// Pointer methods drive the gesture and return the events a listener would
/// receive. `set_selection` moves the rectangle programmatically and never
/// produces an event, so code reacting to a brush end cannot be re-entered by
/// synchronizing the brush from elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    dimension: BrushDimension,
    extent: BrushRect,
    selection: Option<BrushRect>,
    drag: Option<DragMode>,
}

impl Brush {
    #[must_use]
    pub fn new(dimension: BrushDimension, extent: BrushRect) -> Self {
        Self {
            dimension,
            extent,
            selection: None,
            drag: None,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> BrushDimension {
        self.dimension
    }

    #[must_use]
    pub fn extent(&self) -> BrushRect {
        self.extent
    }

    #[must_use]
    pub fn selection(&self) -> Option<BrushRect> {
        self.selection
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a gesture. Pressing inside the current selection moves it;
    /// pressing elsewhere starts a new selection anchored at the pointer.
    ///
    /// Returns `None` when the pointer is outside the brush extent.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<BrushEvent> {
        if !x.is_finite() || !y.is_finite() || !self.extent.contains(x, y) {
            return None;
        }

        let drag = match self.selection {
            Some(selection) if selection.contains(x, y) && !self.is_empty(selection) => {
                DragMode::Move {
                    origin: (x, y),
                    original: selection,
                }
            }
            _ => {
                let anchor = (x, y);
                self.selection = Some(self.rect_between(anchor, anchor));
                DragMode::Create { anchor }
            }
        };
        self.drag = Some(drag);
        trace!(dimension = ?self.dimension, x, y, "brush start");

        Some(BrushEvent {
            phase: BrushPhase::Start,
            selection: self.visible_selection(),
        })
    }

    /// Updates the active gesture; `None` when no gesture is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<BrushEvent> {
        let drag = self.drag?;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let (x, y) = self.extent.clamp_point(x, y);
        let selection = match drag {
            DragMode::Create { anchor } => self.rect_between(anchor, (x, y)),
            DragMode::Move { origin, original } => self.translate_within_extent(
                original,
                x - origin.0,
                y - origin.1,
            ),
        };
        self.selection = Some(selection);

        Some(BrushEvent {
            phase: BrushPhase::Brush,
            selection: self.visible_selection(),
        })
    }

    /// Finishes the active gesture. An empty selection is dropped and
    /// reported as `None`.
    pub fn pointer_up(&mut self) -> Option<BrushEvent> {
        self.drag.take()?;
        if self.selection.is_some_and(|selection| self.is_empty(selection)) {
            self.selection = None;
        }
        trace!(dimension = ?self.dimension, selection = ?self.selection, "brush end");

        Some(BrushEvent {
            phase: BrushPhase::End,
            selection: self.selection,
        })
    }

    /// Moves the rectangle without dispatching any gesture event.
    ///
    /// Any gesture in progress is abandoned. The rectangle is clipped to the
    /// extent; one lying fully outside clears the brush.
    pub fn set_selection(&mut self, selection: Option<BrushRect>) {
        self.drag = None;
        self.selection = selection.and_then(|rect| rect.intersect(self.extent));
    }

    pub fn clear(&mut self) {
        self.set_selection(None);
    }

    fn visible_selection(&self) -> Option<BrushRect> {
        self.selection.filter(|selection| !self.is_empty(*selection))
    }

    fn is_empty(&self, rect: BrushRect) -> bool {
        match self.dimension {
            BrushDimension::X => rect.width() <= 0.0,
            BrushDimension::Y => rect.height() <= 0.0,
            BrushDimension::XY => rect.width() <= 0.0 || rect.height() <= 0.0,
        }
    }

    fn rect_between(&self, a: (f64, f64), b: (f64, f64)) -> BrushRect {
        let rect = BrushRect::from_corners(a, b);
        match self.dimension {
            BrushDimension::X => BrushRect {
                y0: self.extent.y0,
                y1: self.extent.y1,
                ..rect
            },
            BrushDimension::Y => BrushRect {
                x0: self.extent.x0,
                x1: self.extent.x1,
                ..rect
            },
            BrushDimension::XY => rect,
        }
    }

    fn translate_within_extent(&self, rect: BrushRect, dx: f64, dy: f64) -> BrushRect {
        let dx = match self.dimension {
            BrushDimension::Y => 0.0,
            _ => dx.clamp(self.extent.x0 - rect.x0, self.extent.x1 - rect.x1),
        };
        let dy = match self.dimension {
            BrushDimension::X => 0.0,
            _ => dy.clamp(self.extent.y0 - rect.y0, self.extent.y1 - rect.y1),
        };
        BrushRect {
            x0: rect.x0 + dx,
            y0: rect.y0 + dy,
            x1: rect.x1 + dx,
            y1: rect.y1 + dy,
        }
    }
}
