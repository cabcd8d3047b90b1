//! Association service: assigns medicines to users.
//!
//! Both operations run as one read-validate-write transaction:
//! resolve user → resolve medicines → insert missing pairs → commit.
//! Any error drops the transaction, which rolls it back.

use std::collections::HashSet;

use sqlx::SqliteConnection;

use crate::domain::{MatchPolicy, MedicineNames, UserId};
use crate::error::RegistryError;
use crate::persistence::{MedicineRepo, MedicineRow, SqliteStore, UserMedicineRepo, UserRepo};

/// Result of [`AssociationService::assign_medicines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMedicines {
    /// User the medicines belong to.
    pub user_id: UserId,
    /// Every medicine the user holds after the call, in association order.
    pub medicines: Vec<String>,
}

/// Result of [`AssociationService::buy_medicines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    /// User who bought the medicines.
    pub user_id: UserId,
    /// Medicines newly associated by this call, in request order. Empty if
    /// the user already held all of them.
    pub bought: Vec<String>,
}

/// Orchestration layer for user-medicine associations.
///
/// Stateless apart from the storage handle and the configured
/// [`MatchPolicy`]. Uniqueness of each `(user, medicine)` pair is enforced
/// by the storage layer, so concurrent calls for the same user cannot
/// create duplicates or both report the same medicine as new.
#[derive(Debug, Clone)]
pub struct AssociationService {
    store: SqliteStore,
    match_policy: MatchPolicy,
}

impl AssociationService {
    /// Creates a new `AssociationService`.
    #[must_use]
    pub fn new(store: SqliteStore, match_policy: MatchPolicy) -> Self {
        Self {
            store,
            match_policy,
        }
    }

    /// Returns a reference to the inner [`SqliteStore`].
    #[must_use]
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Ensures `user_id` holds every resolvable medicine in `names` and
    /// returns the user's full medicine list.
    ///
    /// Idempotent: repeating the call leaves the association set unchanged.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UserNotFound`] if the user does not exist.
    /// - [`RegistryError::MedicineNotFound`] if no name resolves, or any
    ///   name fails to resolve under [`MatchPolicy::Strict`].
    /// - [`RegistryError::Storage`] on database failure.
    pub async fn assign_medicines(
        &self,
        user_id: UserId,
        names: &MedicineNames,
    ) -> Result<UserMedicines, RegistryError> {
        let mut tx = self.store.begin().await?;
        let inserted = self.associate(&mut tx, user_id, names).await?;
        let medicines = UserMedicineRepo::medicine_names_for_user(&mut tx, user_id).await?;
        tx.commit().await?;

        tracing::info!(
            %user_id,
            inserted = inserted.len(),
            total = medicines.len(),
            "medicines assigned"
        );
        Ok(UserMedicines { user_id, medicines })
    }

    /// Records a purchase of `names` by `user_id` and returns only the
    /// medicines that were not already held.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::assign_medicines`].
    pub async fn buy_medicines(
        &self,
        user_id: UserId,
        names: &MedicineNames,
    ) -> Result<Purchase, RegistryError> {
        let mut tx = self.store.begin().await?;
        let inserted = self.associate(&mut tx, user_id, names).await?;
        tx.commit().await?;

        if inserted.is_empty() {
            tracing::debug!(%user_id, "purchase added no new medicines");
        } else {
            tracing::info!(%user_id, bought = inserted.len(), "medicines bought");
        }
        Ok(Purchase {
            user_id,
            bought: inserted.into_iter().map(|m| m.name).collect(),
        })
    }

    /// Validates both sides and inserts the pairs the user does not hold
    /// yet. Returns the newly associated medicines in request order.
    async fn associate(
        &self,
        conn: &mut SqliteConnection,
        user_id: UserId,
        names: &MedicineNames,
    ) -> Result<Vec<MedicineRow>, RegistryError> {
        let user = UserRepo::find_by_id(conn, user_id)
            .await?
            .ok_or(RegistryError::UserNotFound(user_id))?;

        let mut found = MedicineRepo::find_by_names(conn, names.as_slice()).await?;
        if found.is_empty() {
            tracing::warn!(%user_id, missing = ?names.as_slice(), "no requested medicine exists");
            let missing = match self.match_policy {
                MatchPolicy::Strict => names.as_slice().to_vec(),
                MatchPolicy::Lenient => Vec::new(),
            };
            return Err(RegistryError::MedicineNotFound { missing });
        }

        let missing = names.unmatched(found.iter().map(|m| m.name.as_str()));
        if !missing.is_empty() {
            match self.match_policy {
                MatchPolicy::Strict => return Err(RegistryError::MedicineNotFound { missing }),
                MatchPolicy::Lenient => {
                    tracing::warn!(%user_id, ?missing, "skipping unknown medicines");
                }
            }
        }

        found.sort_by_key(|m| names.position(&m.name));

        let held: HashSet<i64> = UserMedicineRepo::medicine_ids_for_user(conn, user.id)
            .await?
            .into_iter()
            .collect();

        let mut inserted = Vec::new();
        for medicine in found.into_iter().filter(|m| !held.contains(&m.id)) {
            if UserMedicineRepo::insert(conn, user.id, medicine.id).await? {
                inserted.push(medicine);
            }
        }
        Ok(inserted)
    }
}
