//! Property factory for creating test property entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test properties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::property::PropertyFactory;
///
/// let property = PropertyFactory::new(&db)
///     .title("Lakeside cabin")
///     .price(950.0)
///     .build()
///     .await?;
/// ```
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    address: String,
    category: String,
    price: f64,
    bedrooms: i32,
    bathrooms: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Property {id}"` where id is auto-incremented
    /// - description: `None`
    /// - address: `"{id} Main Street"`
    /// - category: `"flat"`
    /// - price: `1000.0`
    /// - bedrooms: `1`, bathrooms: `1`
    /// - status: `"available"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Property {}", id),
            description: None,
            address: format!("{} Main Street", id),
            category: "flat".to_string(),
            price: 1000.0,
            bedrooms: 1,
            bathrooms: 1,
            status: "available".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn bathrooms(mut self, bathrooms: i32) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp, which is also used as the update timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the property entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::property::Model)` - Created property entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        entity::property::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            bedrooms: ActiveValue::Set(self.bedrooms),
            bathrooms: ActiveValue::Set(self.bathrooms),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values.
///
/// Shorthand for `PropertyFactory::new(db).build().await`.
pub async fn create_property(db: &DatabaseConnection) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db).build().await
}
