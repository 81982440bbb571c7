use sea_orm::DatabaseConnection;
use serde_json::Value as JsonValue;

use crate::server::{
    data::property::PropertyRepository,
    error::AppError,
    model::property::{CreatePropertyParam, Property, UpdatePropertyParam, SEARCHABLE_FIELDS},
    query::{EntityCollection, Paginated, QueryBuilder, QueryParams},
};

pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists properties matching the request's search, filter, price range, sort,
    /// projection, and page parameters.
    pub async fn get_paginated(
        &self,
        params: &QueryParams,
    ) -> Result<Paginated<JsonValue>, AppError> {
        let collection = EntityCollection::<entity::prelude::Property>::new(self.db);

        let page = QueryBuilder::new(&collection, params)
            .search(SEARCHABLE_FIELDS)
            .filter()
            .range_filter()
            .sort()
            .fields()
            .paginate()
            .execute()
            .await?;

        Ok(page)
    }

    /// Gets a property with its images
    pub async fn get_by_id(&self, id: i32) -> Result<Property, AppError> {
        PropertyRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, param: CreatePropertyParam) -> Result<Property, AppError> {
        let property = PropertyRepository::new(self.db).create(param).await?;

        tracing::info!("Created property {}", property.id);

        Ok(property)
    }

    /// Replaces a property's fields, returning the property with its images.
    pub async fn update(&self, param: UpdatePropertyParam) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);
        let id = param.id;

        if !repo.exists(id).await? {
            return Err(not_found(id));
        }

        let property = repo.update(param).await?;

        Ok(property)
    }

    /// Deletes a property and removes its stored image files.
    ///
    /// Files that cannot be removed are logged and left behind; the property is
    /// already gone at that point.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let paths = PropertyRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        for path in paths {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Failed to remove image file {}: {}", path, e);
            }
        }

        tracing::info!("Deleted property {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Property {} not found", id))
}
