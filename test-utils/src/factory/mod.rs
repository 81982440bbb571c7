//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let property = factory::create_property(&db).await?;
//!     let image = factory::create_property_image(&db, property.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let property = factory::property::PropertyFactory::new(&db)
//!     .title("Lakeside cabin")
//!     .category("house")
//!     .price(1200.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `property` - Create property entities
//! - `property_image` - Create property image entities
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod property;
pub mod property_image;

pub use property::create_property;
pub use property_image::create_property_image;
