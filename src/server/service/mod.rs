//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They validate existence, coordinate repositories with the listing query builder,
//! and manage files written to the upload directory.

pub mod property;
pub mod property_image;
pub mod upload;

#[cfg(test)]
mod test;
