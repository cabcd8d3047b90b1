//! REST endpoint handlers organized by resource.

pub mod system;
pub mod user_medicine;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(user_medicine::routes())
        .merge(system::routes())
}
