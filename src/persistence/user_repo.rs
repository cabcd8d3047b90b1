//! Repository for the `users` table.

use sqlx::SqliteConnection;

use super::models::UserRow;
use crate::domain::UserId;

/// Read access to registered users.
#[derive(Debug)]
pub struct UserRepo;

impl UserRepo {
    /// Finds a user by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: UserId,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Number of rows in `users`.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] on database failure.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *conn)
            .await
    }
}
