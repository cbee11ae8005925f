// src/storage/gateway.rs
//
// Persistence gateway contract.
//
// Durability here is best-effort across restarts: the in-memory stores are
// the source of truth for the running session, so a failed write is simply
// lost (no retries, no queuing) and a failed read is treated as absence.
// Do not add retries without revisiting that contract.

use async_trait::async_trait;

/// Persisted key for the serialized session identity.
pub const SESSION_KEY: &str = "auth_user";
/// Persisted key for the serialized favorite-id array.
pub const FAVORITES_KEY: &str = "favs";
/// Persisted key for the `"dark"`/`"light"` theme literal.
pub const THEME_KEY: &str = "theme";

/// Scoped async key/value storage.
///
/// Every method swallows its own failures: `get` returns `None` on error,
/// the mutating calls log and return. Nothing here ever surfaces an error
/// to a store.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
    async fn remove(&self, key: &str);
    async fn remove_many(&self, keys: &[&str]);
    async fn clear(&self);
}
