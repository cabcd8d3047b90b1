//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::service::AssociationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Association service for all business logic.
    pub association_service: Arc<AssociationService>,
    /// Loaded configuration.
    pub config: Arc<RegistryConfig>,
}
