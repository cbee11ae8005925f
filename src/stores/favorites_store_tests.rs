// src/stores/favorites_store_tests.rs
//
// UNIT TESTS: Favorites Set
//
// INVARIANTS TESTED:
// - toggle(id) twice restores the original membership
// - add/remove are idempotent; final state depends only on the last
//   operation applied
// - every successful write carries the full current state, so the persisted
//   mirror self-heals after a lost write

#[cfg(test)]
mod favorites_tests {
    use crate::events::EventBus;
    use crate::storage::{MemoryStorage, StorageGateway, FAVORITES_KEY};
    use crate::stores::FavoritesStore;
    use std::sync::Arc;

    fn store_with(gateway: Arc<MemoryStorage>) -> FavoritesStore {
        FavoritesStore::new(gateway, Arc::new(EventBus::new()))
    }

    async fn persisted_ids(gateway: &MemoryStorage) -> Vec<String> {
        // Let detached writes land first.
        tokio::task::yield_now().await;
        match gateway.get(FAVORITES_KEY).await {
            Some(raw) => serde_json::from_str(&raw).unwrap(),
            None => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_double_toggle_restores_membership() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(Arc::clone(&gateway));
        store.hydrate(vec!["a".to_string()]);

        assert!(store.toggle("b"));
        assert!(!store.toggle("b"));
        assert_eq!(store.ids(), vec!["a".to_string()]);

        assert!(!store.toggle("a"));
        assert!(store.toggle("a"));
        assert_eq!(store.ids(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_add_and_remove_are_idempotent() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(gateway);

        store.add("x");
        store.add("x");
        assert_eq!(store.len(), 1);

        store.remove("x");
        store.remove("x");
        assert!(store.is_empty());

        // Removing something that was never there succeeds too.
        store.remove("ghost");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_final_state_depends_only_on_last_operation() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(gateway);

        store.add("x");
        store.remove("x");
        store.add("x");
        assert!(store.contains("x"));

        store.remove("x");
        store.add("x");
        store.remove("x");
        assert!(!store.contains("x"));
    }

    #[tokio::test]
    async fn test_hydrate_yields_exact_membership_without_write() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(Arc::clone(&gateway));

        store.hydrate(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(store.ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(store.contains("a"));
        assert!(store.contains("b"));
        assert!(!store.contains("c"));

        tokio::task::yield_now().await;
        assert_eq!(gateway.get(FAVORITES_KEY).await, None);
    }

    #[tokio::test]
    async fn test_toggle_writes_full_set_through() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(Arc::clone(&gateway));

        store.toggle("a");
        store.toggle("b");

        assert_eq!(
            persisted_ids(&gateway).await,
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clear_empties_and_writes_through() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(Arc::clone(&gateway));

        store.add("a");
        store.add("b");
        store.clear();

        assert!(store.is_empty());
        assert_eq!(persisted_ids(&gateway).await, Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_lost_write_self_heals_on_next_success() {
        let gateway = Arc::new(MemoryStorage::new());
        let store = store_with(Arc::clone(&gateway));

        store.add("a");
        tokio::task::yield_now().await;

        // The write for "b" is lost; in-memory state stays authoritative.
        gateway.set_fail_writes(true);
        store.add("b");
        tokio::task::yield_now().await;
        assert_eq!(persisted_ids(&gateway).await, vec!["a".to_string()]);
        assert!(store.contains("b"));

        // Next successful write carries the full state, including "b".
        gateway.set_fail_writes(false);
        store.add("c");
        assert_eq!(
            persisted_ids(&gateway).await,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
