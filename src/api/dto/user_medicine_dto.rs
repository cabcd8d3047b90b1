//! User-medicine request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::UserId;
use crate::service::{Purchase, UserMedicines};

/// Request body for `POST /user/add_medicines` and `POST /user/buy_medicines`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserMedicineRequest {
    /// Target user ID.
    pub user_id: i64,
    /// Medicine names to associate with the user. Must not be empty.
    #[validate(length(min = 1, message = "medicine_names must not be empty"))]
    pub medicine_names: Vec<String>,
}

/// Response body for `POST /user/add_medicines`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddMedicinesResponse {
    /// User ID.
    pub user_id: UserId,
    /// All medicines the user holds after the call.
    pub medicines: Vec<String>,
}

impl From<UserMedicines> for AddMedicinesResponse {
    fn from(result: UserMedicines) -> Self {
        Self {
            user_id: result.user_id,
            medicines: result.medicines,
        }
    }
}

/// Response body for `POST /user/buy_medicines`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BuyMedicinesResponse {
    /// User ID.
    pub user_id: UserId,
    /// Medicines newly acquired by this purchase; empty if none were new.
    pub bought_medicines: Vec<String>,
}

impl From<Purchase> for BuyMedicinesResponse {
    fn from(result: Purchase) -> Self {
        Self {
            user_id: result.user_id,
            bought_medicines: result.bought,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_with_empty_names_fails_validation() {
        let Ok(req) = serde_json::from_str::<UserMedicineRequest>(
            r#"{"user_id": 1, "medicine_names": []}"#,
        ) else {
            panic!("valid json");
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn request_with_names_passes_validation() {
        let Ok(req) = serde_json::from_str::<UserMedicineRequest>(
            r#"{"user_id": 1, "medicine_names": ["Paracetamol"]}"#,
        ) else {
            panic!("valid json");
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.user_id, 1);
    }

    #[test]
    fn buy_response_uses_wire_field_names() {
        let body = BuyMedicinesResponse::from(Purchase {
            user_id: UserId::new(1),
            bought: Vec::new(),
        });
        let json = serde_json::to_value(&body).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({ "user_id": 1, "bought_medicines": [] }))
        );
    }
}
