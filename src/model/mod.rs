//! Wire-level DTOs shared by the HTTP API.

pub mod api;
pub mod property;
