// src/storage/sqlite.rs
//
// SQLite-backed persistence gateway over the pooled kv table. All I/O runs
// on the blocking pool; errors are logged and swallowed per the gateway
// contract.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::AppResult;
use crate::storage::gateway::StorageGateway;

pub struct SqliteStorage {
    pool: Arc<ConnectionPool>,
    scope: String,
}

impl SqliteStorage {
    pub fn new(pool: Arc<ConnectionPool>, scope: impl Into<String>) -> Self {
        Self {
            pool,
            scope: scope.into(),
        }
    }

    async fn run<T, F>(&self, op: &'static str, key: Option<&str>, f: F) -> Option<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection, &str) -> AppResult<T> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        let scope = self.scope.clone();
        let key_label = key.unwrap_or("*").to_string();

        let joined = tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&conn, &scope)
        })
        .await;

        match joined {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                log::warn!("storage {} failed for '{}': {}", op, key_label, e);
                None
            }
            Err(e) => {
                log::warn!("storage {} task failed for '{}': {}", op, key_label, e);
                None
            }
        }
    }
}

#[async_trait]
impl StorageGateway for SqliteStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let key_owned = key.to_string();
        self.run("get", Some(key), move |conn, scope| {
            let mut stmt = conn.prepare("SELECT value FROM kv WHERE scope = ?1 AND key = ?2")?;
            let mut rows = stmt.query(params![scope, key_owned])?;
            Ok(match rows.next()? {
                Some(row) => Some(row.get::<_, String>(0)?),
                None => None,
            })
        })
        .await
        .flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        let key_owned = key.to_string();
        let value_owned = value.to_string();
        let _ = self.run("set", Some(key), move |conn, scope| {
            conn.execute(
                "INSERT OR REPLACE INTO kv (scope, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)",
                params![scope, key_owned, value_owned, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
        .await;
    }

    async fn remove(&self, key: &str) {
        let key_owned = key.to_string();
        let _ = self.run("remove", Some(key), move |conn, scope| {
            conn.execute(
                "DELETE FROM kv WHERE scope = ?1 AND key = ?2",
                params![scope, key_owned],
            )?;
            Ok(())
        })
        .await;
    }

    async fn remove_many(&self, keys: &[&str]) {
        let keys_owned: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let _ = self.run("remove_many", None, move |conn, scope| {
            for key in &keys_owned {
                conn.execute(
                    "DELETE FROM kv WHERE scope = ?1 AND key = ?2",
                    params![scope, key],
                )?;
            }
            Ok(())
        })
        .await;
    }

    async fn clear(&self) {
        let _ = self.run("clear", None, move |conn, scope| {
            conn.execute("DELETE FROM kv WHERE scope = ?1", params![scope])?;
            Ok(())
        })
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, initialize_storage};

    fn storage(dir: &tempfile::TempDir, scope: &str) -> SqliteStorage {
        let pool = Arc::new(create_connection_pool_at(&dir.path().join("kv.db")).unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_storage(&conn).unwrap();
        }
        SqliteStorage::new(pool, scope)
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, "streambox");

        storage.set("theme", "dark").await;
        assert_eq!(storage.get("theme").await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, "streambox");

        assert_eq!(storage.get("nope").await, None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, "streambox");

        storage.set("theme", "dark").await;
        storage.set("theme", "light").await;
        assert_eq!(storage.get("theme").await.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_remove_and_remove_many() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir, "streambox");

        storage.set("a", "1").await;
        storage.set("b", "2").await;
        storage.set("c", "3").await;

        storage.remove("a").await;
        storage.remove_many(&["b", "c"]).await;

        assert_eq!(storage.get("a").await, None);
        assert_eq!(storage.get("b").await, None);
        assert_eq!(storage.get("c").await, None);
    }

    #[tokio::test]
    async fn test_clear_is_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool_at(&dir.path().join("kv.db")).unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_storage(&conn).unwrap();
        }
        let ours = SqliteStorage::new(Arc::clone(&pool), "streambox");
        let theirs = SqliteStorage::new(pool, "other-app");

        ours.set("theme", "dark").await;
        theirs.set("theme", "light").await;

        ours.clear().await;

        assert_eq!(ours.get("theme").await, None);
        assert_eq!(theirs.get("theme").await.as_deref(), Some("light"));
    }
}
