use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationMetaDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePropertyDto {
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    /// Defaults to `available`.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePropertyDto {
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub category: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PropertyImageDto {
    pub id: i32,
    /// Upload folder chosen from the file's MIME type: `image`, `media`, or `doc`.
    pub folder: String,
    pub path: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PropertyDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub category: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub status: String,
    pub images: Vec<PropertyImageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A page of property listings.
///
/// Each result is a property document restricted to the requested `fields`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPropertiesDto {
    pub meta: PaginationMetaDto,
    #[schema(value_type = Vec<Object>)]
    pub result: Vec<serde_json::Value>,
}

/// Multipart form accepted by the property upload endpoint.
///
/// Only documents the request body; handlers read the parts directly.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPropertyFilesDto {
    /// One or more files. Each part's MIME type picks its folder.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<String>,
}
