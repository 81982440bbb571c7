//! Property data repository for database operations.
//!
//! This module provides the `PropertyRepository` for managing property records. It handles
//! creation, updates, lookups, and deletion, converting entity models to domain models at
//! the infrastructure boundary. Listing queries go through
//! [`EntityCollection`](crate::server::query::EntityCollection) instead.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::property::{CreatePropertyParam, Property, UpdatePropertyParam};

/// Repository providing database operations for property management.
pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    /// Creates a new PropertyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PropertyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new property.
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Arguments
    /// - `param` - Validated property fields
    ///
    /// # Returns
    /// - `Ok(Property)` - The created property with generated ID and no images
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreatePropertyParam) -> Result<Property, DbErr> {
        let now = Utc::now();
        let fields = param.fields;

        let entity = entity::property::ActiveModel {
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            address: ActiveValue::Set(fields.address),
            category: ActiveValue::Set(fields.category),
            price: ActiveValue::Set(fields.price),
            bedrooms: ActiveValue::Set(fields.bedrooms),
            bathrooms: ActiveValue::Set(fields.bathrooms),
            status: ActiveValue::Set(fields.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Property::from_entity(entity, Vec::new()))
    }

    /// Gets a property by ID together with its images.
    ///
    /// Images are ordered by ID, which is upload order.
    ///
    /// # Returns
    /// - `Ok(Some(Property))` - Property found
    /// - `Ok(None)` - No property exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Property>, DbErr> {
        let Some(entity) = entity::prelude::Property::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let images = entity::prelude::PropertyImage::find()
            .filter(entity::property_image::Column::PropertyId.eq(id))
            .order_by_asc(entity::property_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Property::from_entity(entity, images)))
    }

    /// Checks whether a property exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Property::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Replaces a property's fields and bumps its update timestamp.
    ///
    /// # Returns
    /// - `Ok(Property)` - The updated property with its images
    /// - `Err(DbErr::RecordNotFound)` - No property exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, param: UpdatePropertyParam) -> Result<Property, DbErr> {
        let property = entity::prelude::Property::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Property with id {} not found",
                param.id
            )))?;

        let fields = param.fields;
        let mut active_model: entity::property::ActiveModel = property.into();
        active_model.title = ActiveValue::Set(fields.title);
        active_model.description = ActiveValue::Set(fields.description);
        active_model.address = ActiveValue::Set(fields.address);
        active_model.category = ActiveValue::Set(fields.category);
        active_model.price = ActiveValue::Set(fields.price);
        active_model.bedrooms = ActiveValue::Set(fields.bedrooms);
        active_model.bathrooms = ActiveValue::Set(fields.bathrooms);
        active_model.status = ActiveValue::Set(fields.status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await?;

        self.get_by_id(param.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Property with id {} not found",
                param.id
            )))
    }

    /// Deletes a property and its image records.
    ///
    /// # Returns
    /// - `Ok(Some(paths))` - Property deleted; stored paths of its images
    /// - `Ok(None)` - No property exists with the specified ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<Option<Vec<String>>, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Property::find_by_id(id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let paths = entity::prelude::PropertyImage::find()
            .filter(entity::property_image::Column::PropertyId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|image| image.path)
            .collect();

        entity::prelude::PropertyImage::delete_many()
            .filter(entity::property_image::Column::PropertyId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Property::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(paths))
    }
}
