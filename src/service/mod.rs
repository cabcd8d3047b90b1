//! Service layer: business logic orchestration.
//!
//! [`AssociationService`] validates users and medicines and maintains the
//! `user_medicine` association table.

pub mod association_service;

pub use association_service::{AssociationService, Purchase, UserMedicines};
