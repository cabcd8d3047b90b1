//! # medicine-registry
//!
//! REST service that assigns medicines to users and records purchases over
//! a many-to-many SQLite registry.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AssociationService (service/)
//!     │
//!     ├── Repositories + seed data (persistence/)
//!     │
//!     └── SQLite (users, medicines, user_medicine)
//! ```
//!
//! Startup order: load config → open pool → migrate → seed → serve.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
