//! User-medicine handlers: assign and buy.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;

use crate::api::dto::{AddMedicinesResponse, BuyMedicinesResponse, UserMedicineRequest};
use crate::app_state::AppState;
use crate::domain::{MedicineNames, UserId};
use crate::error::{ErrorResponse, RegistryError};

/// Extracts, validates and normalises a [`UserMedicineRequest`].
fn parse_request(
    payload: Result<Json<UserMedicineRequest>, JsonRejection>,
) -> Result<(UserId, MedicineNames), RegistryError> {
    let Json(req) = payload.map_err(|e| RegistryError::Validation(e.body_text()))?;
    req.validate()?;
    let names = MedicineNames::parse(req.medicine_names)?;
    Ok((UserId::new(req.user_id), names))
}

/// `POST /user/add_medicines` — Ensure a user holds the given medicines.
///
/// # Errors
///
/// Returns [`RegistryError`] if the body is invalid, the user does not
/// exist, or no medicine name resolves.
#[utoipa::path(
    post,
    path = "/user/add_medicines",
    tag = "Medicines",
    summary = "Assign medicines to a user",
    description = "Associates every known medicine in `medicine_names` with the user and returns the user's full medicine list. Repeating the call changes nothing.",
    request_body = UserMedicineRequest,
    responses(
        (status = 200, description = "Medicines assigned", body = AddMedicinesResponse),
        (status = 404, description = "User or medicines not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
    )
)]
pub async fn add_medicines(
    State(state): State<AppState>,
    payload: Result<Json<UserMedicineRequest>, JsonRejection>,
) -> Result<Json<AddMedicinesResponse>, RegistryError> {
    let (user_id, names) = parse_request(payload)?;
    let result = state
        .association_service
        .assign_medicines(user_id, &names)
        .await?;
    Ok(Json(result.into()))
}

/// `POST /user/buy_medicines` — Record a purchase of medicines by a user.
///
/// # Errors
///
/// Returns [`RegistryError`] if the body is invalid, the user does not
/// exist, or no medicine name resolves.
#[utoipa::path(
    post,
    path = "/user/buy_medicines",
    tag = "Medicines",
    summary = "Buy medicines",
    description = "Associates the named medicines with the user and returns only those the user did not already hold.",
    request_body = UserMedicineRequest,
    responses(
        (status = 200, description = "Purchase recorded", body = BuyMedicinesResponse),
        (status = 404, description = "User or medicines not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
    )
)]
pub async fn buy_medicines(
    State(state): State<AppState>,
    payload: Result<Json<UserMedicineRequest>, JsonRejection>,
) -> Result<Json<BuyMedicinesResponse>, RegistryError> {
    let (user_id, names) = parse_request(payload)?;
    let purchase = state
        .association_service
        .buy_medicines(user_id, &names)
        .await?;
    Ok(Json(purchase.into()))
}

/// User-medicine routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/add_medicines", post(add_medicines))
        .route("/user/buy_medicines", post(buy_medicines))
}
