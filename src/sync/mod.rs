//! Event streams linking the main chart and its minimap.

mod channel;
mod selection;

pub use channel::{Channel, Subscription, SubscriptionId};
pub use selection::{RegionChannel, RegionRequest, Selection, SelectionChannel};
