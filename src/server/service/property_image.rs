use std::path::Path;

use axum::extract::Multipart;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, property_image::PropertyImageRepository},
    error::{upload::UploadError, AppError},
    model::property::PropertyImage,
    service::upload::UploadBatch,
};

/// Content type assumed for file parts that do not declare one.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

pub struct PropertyImageService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> PropertyImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Stores every file part of a multipart request and attaches it to a property.
    ///
    /// Files are written as they arrive. If any part is rejected or any write or
    /// insert fails, every file written during this request is removed before the
    /// error is returned.
    ///
    /// # Returns
    /// - `Ok(Vec<PropertyImage>)` - The recorded images, in upload order
    /// - `Err(AppError::NotFound)` - Property does not exist
    /// - `Err(AppError::UploadErr)` - Unsupported file type, unnamed file, or no files
    pub async fn upload(
        &self,
        property_id: i32,
        multipart: Multipart,
    ) -> Result<Vec<PropertyImage>, AppError> {
        if !PropertyRepository::new(self.db).exists(property_id).await? {
            return Err(AppError::NotFound(format!(
                "Property {} not found",
                property_id
            )));
        }

        let mut batch = UploadBatch::new(self.upload_dir);
        if let Err(e) = receive(&mut batch, multipart).await {
            batch.rollback().await;
            return Err(e);
        }

        self.record(property_id, batch).await
    }

    /// Persists the files of a batch as images of a property.
    ///
    /// Commits the batch when the rows are written; rolls it back otherwise.
    pub async fn record(
        &self,
        property_id: i32,
        batch: UploadBatch,
    ) -> Result<Vec<PropertyImage>, AppError> {
        if batch.is_empty() {
            batch.rollback().await;
            return Err(UploadError::Empty.into());
        }

        let result = PropertyImageRepository::new(self.db)
            .create_many(property_id, batch.files())
            .await;

        match result {
            Ok(images) => {
                let files = batch.commit();
                tracing::info!(
                    "Stored {} file(s) for property {}",
                    files.len(),
                    property_id
                );
                Ok(images)
            }
            Err(e) => {
                batch.rollback().await;
                Err(e.into())
            }
        }
    }
}

/// Writes every file part of `multipart` into `batch`.
///
/// Parts without a file name or content type are plain form fields and skipped.
async fn receive(batch: &mut UploadBatch, mut multipart: Multipart) -> Result<(), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            if field.content_type().is_some() {
                return Err(UploadError::MissingFileName.into());
            }
            tracing::debug!("Skipping non-file multipart field {:?}", field.name());
            continue;
        };

        let content_type = field
            .content_type()
            .unwrap_or(UNKNOWN_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await.map_err(UploadError::from)?;

        batch.store(&file_name, &content_type, &bytes).await?;
    }

    Ok(())
}
