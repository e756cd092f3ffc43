use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::Bus;
use crate::observer::{BusStatusChange, StatusObserver, SubscriptionId};

#[derive(Debug, Default)]
struct Inner {
    buses: HashMap<i64, Bus>,
    observer: StatusObserver<BusStatusChange>,
}

/// Buses by id plus the subscribers interested in their status changes.
#[derive(Debug, Default)]
pub struct BusRegistry {
    inner: RwLock<Inner>,
}

impl BusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&BusStatusChange) + Send + Sync + 'static,
    {
        self.inner.write().await.observer.subscribe(subscriber)
    }

    pub async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.write().await.observer.unsubscribe(id)
    }

    pub async fn get(&self, bus_id: i64) -> Option<Bus> {
        self.inner.read().await.buses.get(&bus_id).cloned()
    }

    /// Stores the bus. When it replaces an existing record, subscribers get a
    /// status change with the previous and the new status.
    pub async fn save(&self, bus: Bus) -> Bus {
        let mut inner = self.inner.write().await;
        let previous = inner.buses.insert(bus.id, bus.clone());
        match previous {
            Some(old) => {
                let change = BusStatusChange {
                    bus_id: bus.id,
                    old_status: old.status,
                    new_status: bus.status,
                    timestamp: Utc::now(),
                };
                inner.observer.notify(&change);
            }
            None => info!(bus_id = bus.id, "bus registered"),
        }
        bus
    }
}
