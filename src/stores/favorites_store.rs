// src/stores/favorites_store.rs
//
// Unique-id favorite collection with write-through persistence.
//
// Every persisted write carries the full serialized set, so the mirror
// self-heals: even if an intermediate write was lost, the next successful
// one converges on the in-memory state.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::events::{names, EventBus};
use crate::storage::{StorageGateway, FAVORITES_KEY};

pub struct FavoritesStore {
    ids: RwLock<BTreeSet<String>>,
    gateway: Arc<dyn StorageGateway>,
    event_bus: Arc<EventBus>,
}

impl FavoritesStore {
    pub fn new(gateway: Arc<dyn StorageGateway>, event_bus: Arc<EventBus>) -> Self {
        Self {
            ids: RwLock::new(BTreeSet::new()),
            gateway,
            event_bus,
        }
    }

    /// Remove the id if present, add it otherwise. Returns whether the id is
    /// a favorite after the call. Always writes through.
    pub fn toggle(&self, id: &str) -> bool {
        let now_present = {
            let mut ids = self.ids.write().unwrap();
            if !ids.remove(id) {
                ids.insert(id.to_string());
                true
            } else {
                false
            }
        };
        self.persist();
        self.event_bus.emit(names::FAVORITES_CHANGED, None);
        now_present
    }

    /// Idempotent add. Adding a present id succeeds without a write.
    pub fn add(&self, id: &str) {
        let inserted = self.ids.write().unwrap().insert(id.to_string());
        if inserted {
            self.persist();
            self.event_bus.emit(names::FAVORITES_CHANGED, None);
        }
    }

    /// Idempotent remove. Removing an absent id succeeds without a write.
    pub fn remove(&self, id: &str) {
        let removed = self.ids.write().unwrap().remove(id);
        if removed {
            self.persist();
            self.event_bus.emit(names::FAVORITES_CHANGED, None);
        }
    }

    pub fn clear(&self) {
        self.ids.write().unwrap().clear();
        self.persist();
        self.event_bus.emit(names::FAVORITES_CHANGED, None);
    }

    /// Bootstrap-only: replace membership without a persistence write.
    pub fn hydrate(&self, ids: Vec<String>) {
        *self.ids.write().unwrap() = ids.into_iter().collect();
        self.event_bus.emit(names::FAVORITES_CHANGED, None);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.read().unwrap().contains(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.read().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.read().unwrap().is_empty()
    }

    fn persist(&self) {
        let snapshot: Vec<String> = self.ids.read().unwrap().iter().cloned().collect();
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    gateway.set(FAVORITES_KEY, &json).await;
                });
            }
            Err(e) => log::warn!("could not serialize favorites: {}", e),
        }
    }
}
