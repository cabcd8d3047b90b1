//! Domain layer: identifiers and request value types.
//!
//! - [`UserId`]: type-safe user key
//! - [`MedicineNames`]: validated, de-duplicated medicine name list
//! - [`MatchPolicy`]: handling of names with no matching medicine

pub mod match_policy;
pub mod medicine_names;
pub mod user_id;

pub use match_policy::MatchPolicy;
pub use medicine_names::MedicineNames;
pub use user_id::UserId;
