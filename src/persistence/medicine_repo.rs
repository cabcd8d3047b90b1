//! Repository for the `medicines` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::models::MedicineRow;

/// Read access to the medicine catalogue.
#[derive(Debug)]
pub struct MedicineRepo;

impl MedicineRepo {
    /// Returns every medicine whose name is in `names`, ordered by ID.
    ///
    /// An empty `names` slice yields an empty result without touching the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn find_by_names(
        conn: &mut SqliteConnection,
        names: &[String],
    ) -> Result<Vec<MedicineRow>, sqlx::Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT id, name FROM medicines WHERE name IN (");
        let mut separated = builder.separated(", ");
        for name in names {
            separated.push_bind(name.as_str());
        }
        separated.push_unseparated(") ORDER BY id");

        let rows = builder
            .build_query_as::<MedicineRow>()
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Number of rows in `medicines`.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM medicines")
            .fetch_one(&mut *conn)
            .await
    }
}
