//! Database row models for users and medicines.

use crate::domain::UserId;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRow {
    /// Auto-increment row ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

/// A row from the `medicines` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MedicineRow {
    /// Auto-increment row ID.
    pub id: i64,
    /// Unique medicine name, used as the client-facing lookup key.
    pub name: String,
}
