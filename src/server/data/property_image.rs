//! Property image data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::model::{property::PropertyImage, upload::StoredFile};

/// Repository providing database operations for property images.
pub struct PropertyImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records stored files against a property.
    ///
    /// All rows are inserted in one transaction; either every file is recorded or none.
    ///
    /// # Arguments
    /// - `property_id` - ID of the owning property
    /// - `files` - Files already written to disk
    ///
    /// # Returns
    /// - `Ok(Vec<PropertyImage>)` - The created image records, in input order
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create_many(
        &self,
        property_id: i32,
        files: &[StoredFile],
    ) -> Result<Vec<PropertyImage>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();
        let mut images = Vec::with_capacity(files.len());

        for file in files {
            let entity = entity::property_image::ActiveModel {
                property_id: ActiveValue::Set(property_id),
                folder: ActiveValue::Set(file.folder.as_str().to_string()),
                path: ActiveValue::Set(file.path.to_string_lossy().into_owned()),
                content_type: ActiveValue::Set(file.content_type.clone()),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            images.push(PropertyImage::from_entity(entity));
        }

        txn.commit().await?;

        Ok(images)
    }
}
