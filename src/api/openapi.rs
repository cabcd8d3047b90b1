//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{AddMedicinesResponse, BuyMedicinesResponse, UserMedicineRequest};
use crate::api::handlers::{system, user_medicine};
use crate::error::ErrorResponse;

/// Generated OpenAPI document, served by Swagger UI at `/docs`.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "medicine-registry",
        description = "Assigns medicines to users and records purchases."
    ),
    paths(
        user_medicine::add_medicines,
        user_medicine::buy_medicines,
        system::health_handler,
    ),
    components(schemas(
        UserMedicineRequest,
        AddMedicinesResponse,
        BuyMedicinesResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Medicines", description = "User-medicine associations"),
        (name = "System", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_medicine_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/user/add_medicines"));
        assert!(doc.paths.paths.contains_key("/user/buy_medicines"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
