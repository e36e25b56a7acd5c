mod brush;
mod double_click;

pub use brush::{Brush, BrushDimension, BrushEvent, BrushPhase, BrushRect};
pub use double_click::{DEFAULT_DOUBLE_CLICK_WINDOW, DoubleClick, GestureController};

use serde::{Deserialize, Serialize};

/// Gesture currently holding pointer capture on a chart view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ActiveGesture {
    #[default]
    Idle,
    XBrush,
    YBrush,
    XAxisPan {
        last_x: f64,
    },
}

/// Public crosshair state exposed to host applications.
///
/// `time` and `value` are the pointer position inverted through the chart
/// scales at the moment of the last pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub value: f64,
}

impl Default for CrosshairState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            time: 0.0,
            value: 0.0,
        }
    }
}

/// Hover highlight behind each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisHighlight {
    pub x_axis: bool,
    pub y_axis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    gesture: ActiveGesture,
    crosshair: CrosshairState,
    highlight: AxisHighlight,
}

impl InteractionState {
    #[must_use]
    pub fn gesture(self) -> ActiveGesture {
        self.gesture
    }

    pub fn set_gesture(&mut self, gesture: ActiveGesture) {
        self.gesture = gesture;
    }

    #[must_use]
    pub fn crosshair(self) -> CrosshairState {
        self.crosshair
    }

    #[must_use]
    pub fn highlight(self) -> AxisHighlight {
        self.highlight
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, time: f64, value: f64) {
        self.crosshair = CrosshairState {
            visible: true,
            x,
            y,
            time,
            value,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.crosshair.visible = false;
    }

    pub fn set_x_axis_highlight(&mut self, on: bool) {
        self.highlight.x_axis = on;
    }

    pub fn set_y_axis_highlight(&mut self, on: bool) {
        self.highlight.y_axis = on;
    }
}
