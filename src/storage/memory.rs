// src/storage/memory.rs
//
// HashMap-backed gateway for tests. The failure toggle simulates lost
// writes so the self-healing persistence invariant can be exercised.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::storage::gateway::StorageGateway;

#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, mutating calls are dropped (logged and swallowed),
    /// mimicking a storage medium that is temporarily failing.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn writes_failing(&self) -> bool {
        self.fail_writes.load(Ordering::SeqCst)
    }

    /// Snapshot of everything currently persisted.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().unwrap().clone()
    }

    /// Pre-seed a persisted value (test setup for hydration scenarios).
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl StorageGateway for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        if self.writes_failing() {
            log::warn!("storage set failed for '{}': injected failure", key);
            return;
        }
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        if self.writes_failing() {
            log::warn!("storage remove failed for '{}': injected failure", key);
            return;
        }
        self.entries.write().unwrap().remove(key);
    }

    async fn remove_many(&self, keys: &[&str]) {
        if self.writes_failing() {
            log::warn!("storage remove_many failed: injected failure");
            return;
        }
        let mut entries = self.entries.write().unwrap();
        for key in keys {
            entries.remove(*key);
        }
    }

    async fn clear(&self) {
        if self.writes_failing() {
            log::warn!("storage clear failed: injected failure");
            return;
        }
        self.entries.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set("favs", "[\"a\"]").await;
        assert_eq!(storage.get("favs").await.as_deref(), Some("[\"a\"]"));
    }

    #[tokio::test]
    async fn test_injected_failure_drops_write() {
        let storage = MemoryStorage::new();
        storage.set("theme", "dark").await;

        storage.set_fail_writes(true);
        storage.set("theme", "light").await;

        // Old value survives; the failed write is simply lost.
        assert_eq!(storage.get("theme").await.as_deref(), Some("dark"));
    }
}
