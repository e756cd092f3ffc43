//! Publish/subscribe for status changes.
//!
//! There is no process-wide instance: whoever owns a [`StatusObserver`] hands
//! it (or a handle to its owner) to the components that publish or listen.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::models::BusStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<E> = Box<dyn Fn(&E) + Send + Sync>;

pub struct StatusObserver<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<E>)>,
}

impl<E> Default for StatusObserver<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> StatusObserver<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Calls every subscriber in subscription order.
    pub fn notify(&self, event: &E) {
        for (_, subscriber) in &self.subscribers {
            subscriber(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> std::fmt::Debug for StatusObserver<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusObserver")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStatusChange {
    pub bus_id: i64,
    pub old_status: BusStatus,
    pub new_status: BusStatus,
    pub timestamp: DateTime<Utc>,
}

pub fn log_bus_status_change(change: &BusStatusChange) {
    info!(
        bus_id = change.bus_id,
        "Bus {} status changed from {} to {}",
        change.bus_id, change.old_status, change.new_status
    );
}
