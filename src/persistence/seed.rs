//! First-boot reference data for users and medicines.
//!
//! Each table is filled by a single `INSERT ... SELECT ... WHERE NOT EXISTS`
//! statement, so the check and the insert are one atomic step. Running the
//! seed again, from this process or another instance sharing the database,
//! writes nothing once a table holds any row.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::sqlite::SqliteStore;
use crate::error::RegistryError;

/// Medicines inserted into an empty `medicines` table.
pub const SEED_MEDICINES: [&str; 5] = ["Paracetamol", "Broufen", "Panadol", "Alp", "Calpol"];

/// Users inserted into an empty `users` table.
pub const SEED_USERS: [&str; 4] = ["John Doe", "Jane Smith", "Bjorn", "Ali"];

/// Rows written by one [`seed`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Rows inserted into `medicines`.
    pub medicines_inserted: u64,
    /// Rows inserted into `users`.
    pub users_inserted: u64,
}

/// Populates empty reference tables. Existing rows are never touched.
///
/// # Errors
///
/// Returns [`RegistryError::Storage`] on database failure; nothing is
/// committed in that case.
pub async fn seed(store: &SqliteStore) -> Result<SeedReport, RegistryError> {
    let mut tx = store.begin().await?;
    let medicines_inserted = insert_if_empty(&mut tx, "medicines", &SEED_MEDICINES).await?;
    let users_inserted = insert_if_empty(&mut tx, "users", &SEED_USERS).await?;
    tx.commit().await?;

    let report = SeedReport {
        medicines_inserted,
        users_inserted,
    };
    tracing::info!(
        medicines = report.medicines_inserted,
        users = report.users_inserted,
        "seed data applied"
    );
    Ok(report)
}

async fn insert_if_empty(
    conn: &mut SqliteConnection,
    table: &'static str,
    names: &[&'static str],
) -> Result<u64, sqlx::Error> {
    let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("INSERT INTO ");
    builder.push(table);
    builder.push(" (name) SELECT column1 FROM (");
    builder.push_values(names.iter().copied(), |mut row, name| {
        row.push_bind(name);
    });
    builder.push(") WHERE NOT EXISTS (SELECT 1 FROM ");
    builder.push(table);
    builder.push(")");

    let result = builder.build().execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::{MedicineRepo, UserRepo};

    async fn migrated_store() -> SqliteStore {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store");
        };
        let Ok(()) = store.migrate().await else {
            panic!("migration failed");
        };
        store
    }

    async fn counts(store: &SqliteStore) -> (i64, i64) {
        let Ok(mut conn) = store.pool().acquire().await else {
            panic!("connection");
        };
        let medicines = MedicineRepo::count(&mut conn).await.unwrap_or(-1);
        let users = UserRepo::count(&mut conn).await.unwrap_or(-1);
        (medicines, users)
    }

    #[tokio::test]
    async fn seeds_empty_tables() {
        let store = migrated_store().await;
        let Ok(report) = seed(&store).await else {
            panic!("seed failed");
        };
        assert_eq!(report.medicines_inserted, 5);
        assert_eq!(report.users_inserted, 4);
        assert_eq!(counts(&store).await, (5, 4));
    }

    #[tokio::test]
    async fn second_run_inserts_nothing() {
        let store = migrated_store().await;
        let _ = seed(&store).await;
        let Ok(report) = seed(&store).await else {
            panic!("seed failed");
        };
        assert_eq!(report, SeedReport::default());
        assert_eq!(counts(&store).await, (5, 4));
    }

    #[tokio::test]
    async fn seed_preserves_declared_order() {
        let store = migrated_store().await;
        let _ = seed(&store).await;
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM medicines ORDER BY id")
            .fetch_all(store.pool())
            .await
            .unwrap_or_default();
        assert_eq!(names, SEED_MEDICINES);

        let first_user: Option<String> =
            sqlx::query_scalar("SELECT name FROM users WHERE id = 1")
                .fetch_optional(store.pool())
                .await
                .unwrap_or_default();
        assert_eq!(first_user.as_deref(), Some("John Doe"));
    }

    #[tokio::test]
    async fn non_empty_table_is_left_alone() {
        let store = migrated_store().await;
        let inserted = sqlx::query("INSERT INTO users (name) VALUES ('Existing')")
            .execute(store.pool())
            .await;
        assert!(inserted.is_ok());

        let Ok(report) = seed(&store).await else {
            panic!("seed failed");
        };
        assert_eq!(report.users_inserted, 0);
        assert_eq!(report.medicines_inserted, 5);
        assert_eq!(counts(&store).await, (5, 1));
    }
}
