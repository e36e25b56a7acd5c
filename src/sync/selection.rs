use serde::{Deserialize, Serialize};

use crate::core::Domain;
use crate::sync::Channel;

/// Snapshot of a chart view's visible domains.
///
/// Wire shape: `{"xSelection": [min, max], "ySelection": [min, max]}` with
/// timestamps in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub x_selection: Domain,
    pub y_selection: Domain,
}

impl Selection {
    #[must_use]
    pub fn new(x_selection: Domain, y_selection: Domain) -> Self {
        Self {
            x_selection,
            y_selection,
        }
    }
}

/// Domains a minimap brush asks its target chart to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRequest {
    pub x_domain: Domain,
    pub y_domain: Domain,
}

impl RegionRequest {
    #[must_use]
    pub fn new(x_domain: Domain, y_domain: Domain) -> Self {
        Self { x_domain, y_domain }
    }
}

/// Chart → minimap stream of visible-domain snapshots.
pub type SelectionChannel = Channel<Selection>;

/// Minimap → chart stream of requested domains.
pub type RegionChannel = Channel<RegionRequest>;
