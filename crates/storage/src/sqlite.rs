//! SQLite KV backend — the default persistent store.
//!
//! A single `kv` table holds every key. WAL journaling keeps concurrent
//! reader/writer behavior sane on the flash storage of a typical mesh node.

use async_trait::async_trait;
use chrono::Utc;
use meshmind_core::error::StorageError;
use meshmind_core::storage::KvStore;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// A persistent SQLite key-value store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path.
    ///
    /// The database file and schema are created automatically.
    pub async fn new(path: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(path)
            .map_err(|e| StorageError::Backend(format!("Invalid SQLite path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to open SQLite: {e}")))?;

        let store = Self { pool };
        store.run_migrations().await?;
        info!("SQLite store initialized at {path}");
        Ok(store)
    }

    /// Create from an existing pool (useful for testing).
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KvStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store(dir: &tempfile::TempDir) -> SqliteStore {
        let path = dir.path().join("test.db");
        SqliteStore::new(&path.to_string_lossy()).await.unwrap()
    }

    #[tokio::test]
    async fn set_and_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        store.set("history_abc", r#"[{"role":"user","content":"hi"}]"#)
            .await
            .unwrap();
        let value = store.get("history_abc").await.unwrap();
        assert_eq!(
            value.as_deref(),
            Some(r#"[{"role":"user","content":"hi"}]"#)
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        store.set("current_model", "llama3.2").await.unwrap();
        store.set("current_model", "mistral").await.unwrap();
        assert_eq!(
            store.get("current_model").await.unwrap().as_deref(),
            Some("mistral")
        );
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persist.db");

        {
            let store = SqliteStore::new(&path.to_string_lossy()).await.unwrap();
            store.set("k", "v").await.unwrap();
        }

        let store = SqliteStore::new(&path.to_string_lossy()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn from_pool_runs_migrations() {
        // Single connection so the in-memory database is shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();

        let store = SqliteStore::from_pool(pool).await.unwrap();
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
