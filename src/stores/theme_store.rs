// src/stores/theme_store.rs
//
// Binary display-mode preference, persisted as the literal "dark"/"light".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::events::{names, EventBus};
use crate::storage::{StorageGateway, THEME_KEY};

const DARK_LITERAL: &str = "dark";
const LIGHT_LITERAL: &str = "light";

pub struct ThemeStore {
    is_dark: AtomicBool,
    gateway: Arc<dyn StorageGateway>,
    event_bus: Arc<EventBus>,
}

impl ThemeStore {
    pub fn new(gateway: Arc<dyn StorageGateway>, event_bus: Arc<EventBus>) -> Self {
        Self {
            is_dark: AtomicBool::new(false),
            gateway,
            event_bus,
        }
    }

    /// Bootstrap-only: absent or unreadable values fall back to light.
    pub fn hydrate(&self, raw: Option<&str>) {
        self.is_dark
            .store(raw == Some(DARK_LITERAL), Ordering::SeqCst);
        self.event_bus.emit(names::THEME_CHANGED, None);
    }

    /// Flip the mode, returning the new value synchronously so the caller
    /// can reflect it immediately. The write rides a detached task.
    pub fn toggle(&self) -> bool {
        let was_dark = self.is_dark.fetch_xor(true, Ordering::SeqCst);
        let now_dark = !was_dark;

        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            gateway
                .set(THEME_KEY, if now_dark { DARK_LITERAL } else { LIGHT_LITERAL })
                .await;
        });

        self.event_bus.emit(names::THEME_CHANGED, None);
        now_dark
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store_with(gateway: Arc<MemoryStorage>) -> ThemeStore {
        ThemeStore::new(gateway, Arc::new(EventBus::new()))
    }

    #[tokio::test]
    async fn test_defaults_to_light() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(!store.is_dark());

        store.hydrate(None);
        assert!(!store.is_dark());

        store.hydrate(Some("garbled"));
        assert!(!store.is_dark());
    }

    #[tokio::test]
    async fn test_persisted_dark_hydrates_then_toggle_writes_light() {
        let gateway = Arc::new(MemoryStorage::new());
        gateway.seed(THEME_KEY, "dark");
        let store = store_with(Arc::clone(&gateway));

        let raw = gateway.get(THEME_KEY).await;
        store.hydrate(raw.as_deref());
        assert!(store.is_dark());

        let now_dark = store.toggle();
        assert!(!now_dark);
        assert!(!store.is_dark());

        tokio::task::yield_now().await;
        assert_eq!(gateway.get(THEME_KEY).await.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_toggle_returns_new_value_synchronously() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(store.toggle());
        assert!(!store.toggle());
        assert!(store.toggle());
        assert!(store.is_dark());
    }
}
