//! SQLite connection pool and embedded schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::config::RegistryConfig;
use crate::error::RegistryError;

/// Embedded migrations from `./migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQLite-backed storage handle using `sqlx::SqlitePool`.
///
/// Cheap to clone; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens a pool against `config.database_url`.
    ///
    /// File databases are created if missing and run in WAL mode. Foreign
    /// keys are enforced on every connection.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let timeout = Duration::from_secs(config.database_connect_timeout_secs);
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(timeout)
            .connect_with(options)
            .await?;

        tracing::info!(
            url = %config.database_url,
            max_connections = config.database_max_connections,
            "database pool opened"
        );
        Ok(Self { pool })
    }

    /// Opens a private in-memory database on a single, never-recycled
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if SQLite cannot be initialised.
    pub async fn in_memory() -> Result<Self, RegistryError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Applies all pending schema migrations. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Migration`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), RegistryError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::debug!("schema migrations applied");
        Ok(())
    }

    /// Starts a write transaction with `BEGIN IMMEDIATE`. It rolls back
    /// when dropped without commit.
    ///
    /// The write lock is taken before the first read, so overlapping writers
    /// wait on the busy timeout instead of failing with `SQLITE_BUSY`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if no connection can be acquired
    /// or the lock is not granted within the busy timeout.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, RegistryError> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Runs a trivial query to confirm the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on database failure.
    pub async fn health_check(&self) -> Result<(), RegistryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store");
        };
        assert!(store.migrate().await.is_ok());
        assert!(store.migrate().await.is_ok());

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name IN ('users', 'medicines', 'user_medicine') ORDER BY name",
        )
        .fetch_all(store.pool())
        .await
        .unwrap_or_default();
        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, ["medicines", "user_medicine", "users"]);
    }

    #[tokio::test]
    async fn health_check_succeeds() {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store");
        };
        assert!(store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn association_pair_is_unique() {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store");
        };
        assert!(store.migrate().await.is_ok());
        let pool = store.pool();
        let user = sqlx::query("INSERT INTO users (name) VALUES ('u')")
            .execute(pool)
            .await;
        assert!(user.is_ok());
        let medicine = sqlx::query("INSERT INTO medicines (name) VALUES ('m')")
            .execute(pool)
            .await;
        assert!(medicine.is_ok());

        let first = sqlx::query("INSERT INTO user_medicine (user_id, medicine_id) VALUES (1, 1)")
            .execute(pool)
            .await;
        assert!(first.is_ok());
        let second = sqlx::query("INSERT INTO user_medicine (user_id, medicine_id) VALUES (1, 1)")
            .execute(pool)
            .await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn association_requires_existing_user() {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store");
        };
        assert!(store.migrate().await.is_ok());
        let result =
            sqlx::query("INSERT INTO user_medicine (user_id, medicine_id) VALUES (99, 99)")
                .execute(store.pool())
                .await;
        assert!(result.is_err());
    }
}
