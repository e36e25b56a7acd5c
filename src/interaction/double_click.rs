use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::sync::{Channel, Subscription, SubscriptionId};

/// Default quiet period that closes a click burst.
pub const DEFAULT_DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(250);

/// Emitted once per burst of exactly two clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleClick {
    pub first_click_at: Duration,
    pub second_click_at: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Burst {
    first_at: Duration,
    last_at: Duration,
    count: usize,
}

/// Document-level double-click detector.
///
/// Clicks are grouped into bursts: a burst closes once no click has arrived
/// for `window`. A closed burst of exactly two clicks is one double click;
/// single clicks and longer bursts produce nothing. There are no timers: the
/// host passes event timestamps to [`on_click`](Self::on_click) and calls
/// [`tick`](Self::tick) from its frame or timer loop so a trailing burst can
/// close.
#[derive(Debug)]
pub struct GestureController {
    window: Duration,
    burst: Option<Burst>,
    channel: Channel<DoubleClick>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            window: DEFAULT_DOUBLE_CLICK_WINDOW,
            burst: None,
            channel: Channel::new(),
        }
    }
}

impl GestureController {
    pub fn new(window: Duration) -> ChartResult<Self> {
        if window.is_zero() {
            return Err(ChartError::InvalidConfig(
                "double click window must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            window,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn subscribe(&mut self) -> Subscription<DoubleClick> {
        self.channel.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    /// Clicks recorded in the burst that is still open.
    #[must_use]
    pub fn pending_clicks(&self) -> usize {
        self.burst.map_or(0, |burst| burst.count)
    }

    /// Records a click at `at`.
    ///
    /// Returns the double click of a previous burst that this click proves
    /// closed, if any. A click never completes its own burst.
    pub fn on_click(&mut self, at: Duration) -> Option<DoubleClick> {
        let at = match self.burst {
            Some(burst) if at < burst.last_at => {
                warn!(
                    at_ms = at.as_millis() as u64,
                    last_ms = burst.last_at.as_millis() as u64,
                    "click timestamp went backwards; clamping"
                );
                burst.last_at
            }
            _ => at,
        };

        let closed = self.tick(at);
        let burst = self.burst.get_or_insert(Burst {
            first_at: at,
            last_at: at,
            count: 0,
        });
        burst.count += 1;
        burst.last_at = at;
        trace!(count = burst.count, "click recorded");
        closed
    }

    /// Closes the open burst when `now` is at least `window` past its last
    /// click.
    pub fn tick(&mut self, now: Duration) -> Option<DoubleClick> {
        let burst = self.burst?;
        if now.saturating_sub(burst.last_at) < self.window {
            return None;
        }

        self.burst = None;
        if burst.count != 2 {
            trace!(count = burst.count, "click burst closed without double click");
            return None;
        }

        let double_click = DoubleClick {
            first_click_at: burst.first_at,
            second_click_at: burst.last_at,
        };
        debug!(
            first_ms = burst.first_at.as_millis() as u64,
            second_ms = burst.last_at.as_millis() as u64,
            "double click detected"
        );
        self.channel.publish(double_click);
        Some(double_click)
    }
}
