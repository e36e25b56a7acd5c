use serde::{Deserialize, Serialize};

/// Counters of the side effects a view performed since construction.
///
/// Hosts use them for diagnostics; tests use them to assert that a gesture
/// was a no-op or that redraws happened in the expected order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewStats {
    pub domain_mutations: u64,
    pub line_redraws: u64,
    pub x_axis_redraws: u64,
    pub y_axis_redraws: u64,
    pub publishes: u64,
    pub frames_rendered: u64,
}
