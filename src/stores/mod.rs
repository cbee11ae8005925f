// src/stores/mod.rs
//
// In-memory state containers. Mutations are synchronous; their paired
// persistence writes are fire-and-forget.

pub mod broadcaster;
pub mod catalog_store;
pub mod favorites_store;
pub mod session_store;
pub mod theme_store;

#[cfg(test)]
mod favorites_store_tests;

pub use broadcaster::{
    Notification, NotificationBroadcaster, UndoAction, DEFAULT_NOTIFICATION_DURATION,
};
pub use catalog_store::CatalogStore;
pub use favorites_store::FavoritesStore;
pub use session_store::SessionStore;
pub use theme_store::ThemeStore;
