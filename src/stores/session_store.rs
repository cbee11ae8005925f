// src/stores/session_store.rs
//
// Authenticated-identity state. The in-memory identity is authoritative; the
// persisted mirror under `auth_user` is refreshed fire-and-forget.

use std::sync::{Arc, RwLock};

use crate::domain::Identity;
use crate::events::{names, EventBus};
use crate::storage::{StorageGateway, SESSION_KEY};

pub struct SessionStore {
    identity: RwLock<Option<Identity>>,
    gateway: Arc<dyn StorageGateway>,
    event_bus: Arc<EventBus>,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn StorageGateway>, event_bus: Arc<EventBus>) -> Self {
        Self {
            identity: RwLock::new(None),
            gateway,
            event_bus,
        }
    }

    /// Sign the identity in. The state change is visible to watchers before
    /// this returns; the persistence write rides a detached task.
    pub fn login(&self, identity: Identity) {
        *self.identity.write().unwrap() = Some(identity.clone());
        self.persist(identity);
        self.event_bus.emit(names::SESSION_CHANGED, None);
    }

    /// Clear the session and drop the persisted mirror. `session-ended` is
    /// emitted in the same dispatch so decoupled state (e.g. favorites) can
    /// reset itself.
    pub fn logout(&self) {
        *self.identity.write().unwrap() = None;

        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            gateway.remove(SESSION_KEY).await;
        });

        self.event_bus.emit(names::SESSION_ENDED, None);
        self.event_bus.emit(names::SESSION_CHANGED, None);
    }

    /// Bootstrap-only: set state without the redundant persistence write.
    pub fn hydrate(&self, identity: Option<Identity>) {
        *self.identity.write().unwrap() = identity;
        self.event_bus.emit(names::SESSION_CHANGED, None);
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.read().unwrap().is_some()
    }

    fn persist(&self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(json) => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    gateway.set(SESSION_KEY, &json).await;
                });
            }
            Err(e) => log::warn!("could not serialize session identity: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store_with(gateway: Arc<MemoryStorage>) -> (SessionStore, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let store = SessionStore::new(gateway, Arc::clone(&bus));
        (store, bus)
    }

    #[tokio::test]
    async fn test_login_is_visible_immediately_and_persists() {
        let gateway = Arc::new(MemoryStorage::new());
        let (store, _bus) = store_with(Arc::clone(&gateway));

        store.login(Identity::new("alice", Some("alice@example.com".to_string())));
        assert_eq!(store.current().unwrap().username, "alice");

        // Let the detached write land.
        tokio::task::yield_now().await;
        let raw = gateway.get(SESSION_KEY).await.unwrap();
        let persisted: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.username, "alice");
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_mirror() {
        let gateway = Arc::new(MemoryStorage::new());
        let (store, _bus) = store_with(Arc::clone(&gateway));

        store.login(Identity::new("alice", None));
        tokio::task::yield_now().await;

        store.logout();
        assert!(!store.is_authenticated());

        tokio::task::yield_now().await;
        assert_eq!(gateway.get(SESSION_KEY).await, None);
    }

    #[tokio::test]
    async fn test_watchers_see_new_state_within_dispatch() {
        let gateway = Arc::new(MemoryStorage::new());
        let bus = Arc::new(EventBus::new());
        let store = Arc::new(SessionStore::new(gateway, Arc::clone(&bus)));

        let observed = Arc::new(AtomicUsize::new(0));
        let store_clone = Arc::clone(&store);
        let observed_clone = Arc::clone(&observed);
        bus.subscribe(names::SESSION_CHANGED, move |_| {
            // The mutation must already be readable here.
            if store_clone.current().map(|i| i.username) == Some("alice".to_string()) {
                observed_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        store.login(Identity::new("alice", None));
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_hydrate_does_not_write() {
        let gateway = Arc::new(MemoryStorage::new());
        let (store, _bus) = store_with(Arc::clone(&gateway));

        store.hydrate(Some(Identity::new("bob", None)));
        assert_eq!(store.current().unwrap().username, "bob");

        tokio::task::yield_now().await;
        assert_eq!(gateway.get(SESSION_KEY).await, None);
    }

    #[tokio::test]
    async fn test_logout_emits_session_ended() {
        let gateway = Arc::new(MemoryStorage::new());
        let (store, bus) = store_with(gateway);

        let ended = Arc::new(AtomicUsize::new(0));
        let ended_clone = Arc::clone(&ended);
        bus.subscribe(names::SESSION_ENDED, move |_| {
            ended_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.login(Identity::new("alice", None));
        store.logout();
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }
}
