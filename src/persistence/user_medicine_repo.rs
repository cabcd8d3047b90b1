//! Repository for the `user_medicine` association table.
//!
//! The table's composite primary key `(user_id, medicine_id)` is the
//! authority on uniqueness: inserts never fail on an existing pair, they
//! simply report that nothing was written.

use sqlx::SqliteConnection;

use crate::domain::UserId;

/// Read/write access to user-medicine associations.
#[derive(Debug)]
pub struct UserMedicineRepo;

impl UserMedicineRepo {
    /// IDs of all medicines currently held by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn medicine_ids_for_user(
        conn: &mut SqliteConnection,
        user_id: UserId,
    ) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT medicine_id FROM user_medicine WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Names of all medicines held by `user_id`, in the order they were
    /// associated.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn medicine_names_for_user(
        conn: &mut SqliteConnection,
        user_id: UserId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT m.name FROM user_medicine um \
             JOIN medicines m ON m.id = um.medicine_id \
             WHERE um.user_id = ? ORDER BY um.rowid",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Associates `medicine_id` with `user_id`.
    ///
    /// Returns `true` if a new row was written, `false` if the pair already
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn insert(
        conn: &mut SqliteConnection,
        user_id: UserId,
        medicine_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_medicine (user_id, medicine_id) VALUES (?, ?) \
             ON CONFLICT (user_id, medicine_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(medicine_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Number of associations held by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn count_for_user(
        conn: &mut SqliteConnection,
        user_id: UserId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_medicine WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
    }
}
