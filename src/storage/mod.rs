// src/storage/mod.rs
//
// Persistence gateway: scoped async key/value storage.

pub mod gateway;
pub mod memory;
pub mod sqlite;

pub use gateway::{StorageGateway, FAVORITES_KEY, SESSION_KEY, THEME_KEY};
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
