//! Data Transfer Objects for REST request/response serialization.

pub mod user_medicine_dto;

pub use user_medicine_dto::*;
