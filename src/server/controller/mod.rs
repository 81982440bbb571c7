//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into domain parameters, call the
//! service layer, and convert the results back into DTOs. Every handler carries a
//! `utoipa::path` annotation that feeds the generated OpenAPI document.

pub mod property;
