//! Server-side domain models and operation parameters.
//!
//! Models here sit between the data layer and the controllers. Repositories
//! return them instead of entity models, and controllers convert them to DTOs.

pub mod property;
pub mod upload;
