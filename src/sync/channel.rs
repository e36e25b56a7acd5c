use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Identifier handed out by [`Channel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

/// Receiving end of one channel subscription.
///
/// Dropping the subscription unsubscribes it; the channel prunes the
/// disconnected sender on its next publish.
#[derive(Debug)]
pub struct Subscription<T> {
    id: SubscriptionId,
    receiver: Receiver<T>,
}

impl<T> Subscription<T> {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Next pending emission, oldest first.
    #[must_use]
    pub fn try_next(&self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Takes every pending emission in publish order.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

/// Ordered single-producer, multi-consumer event stream.
///
/// Publishing is synchronous and never runs consumer code: each subscriber
/// gets its own unbounded queue and drains it when it is ready, so a consumer
/// reacting to an emission can never re-enter the producer that published it.
#[derive(Debug)]
pub struct Channel<T> {
    senders: IndexMap<SubscriptionId, Sender<T>>,
    next_id: u64,
    dedupe_consecutive: bool,
    last: Option<T>,
    published: u64,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            senders: IndexMap::new(),
            next_id: 0,
            dedupe_consecutive: false,
            last: None,
            published: 0,
        }
    }
}

impl<T: Clone + PartialEq> Channel<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables skipping an emission identical to the previous one.
    #[must_use]
    pub fn with_dedupe(mut self, enabled: bool) -> Self {
        self.dedupe_consecutive = enabled;
        self
    }

    pub fn subscribe(&mut self) -> Subscription<T> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (sender, receiver) = unbounded();
        self.senders.insert(id, sender);
        Subscription { id, receiver }
    }

    /// Removes a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.senders.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }

    /// Number of emissions that reached the subscribers so far.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.published
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Delivers `value` to every live subscriber in subscription order.
    ///
    /// Returns the number of subscribers reached; `0` also when the emission
    /// was skipped as a consecutive duplicate.
    pub fn publish(&mut self, value: T) -> usize {
        if self.dedupe_consecutive && self.last.as_ref() == Some(&value) {
            trace!("skipping duplicate emission");
            return 0;
        }

        self.senders
            .retain(|_, sender| sender.send(value.clone()).is_ok());
        self.published += 1;
        self.last = Some(value);
        self.senders.len()
    }
}
