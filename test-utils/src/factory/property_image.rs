//! Property image factory for creating test image entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test property images.
pub struct PropertyImageFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    folder: String,
    path: String,
    content_type: String,
}

impl<'a> PropertyImageFactory<'a> {
    /// Creates a new PropertyImageFactory with default values.
    ///
    /// Defaults:
    /// - folder: `"image"`
    /// - path: `"uploads/image/{id}.png"` where id is auto-incremented
    /// - content_type: `"image/png"`
    pub fn new(db: &'a DatabaseConnection, property_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            property_id,
            folder: "image".to_string(),
            path: format!("uploads/image/{}.png", id),
            content_type: "image/png".to_string(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::property_image::Model, DbErr> {
        entity::property_image::ActiveModel {
            id: ActiveValue::NotSet,
            property_id: ActiveValue::Set(self.property_id),
            folder: ActiveValue::Set(self.folder),
            path: ActiveValue::Set(self.path),
            content_type: ActiveValue::Set(self.content_type),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values for the specified property.
pub async fn create_property_image(
    db: &DatabaseConnection,
    property_id: i32,
) -> Result<entity::property_image::Model, DbErr> {
    PropertyImageFactory::new(db, property_id).build().await
}
