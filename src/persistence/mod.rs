//! Persistence layer: SQLite storage, repositories and seed data.
//!
//! [`SqliteStore`] owns the `sqlx::SqlitePool` and the embedded migrator.
//! Repositories are stateless and take a `&mut SqliteConnection`, so callers
//! decide the transaction boundary.

pub mod medicine_repo;
pub mod models;
pub mod seed;
pub mod sqlite;
pub mod user_medicine_repo;
pub mod user_repo;

pub use medicine_repo::MedicineRepo;
pub use models::{MedicineRow, UserRow};
pub use seed::{SeedReport, seed};
pub use sqlite::SqliteStore;
pub use user_medicine_repo::UserMedicineRepo;
pub use user_repo::UserRepo;
