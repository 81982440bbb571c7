//! Property domain models and parameters.
//!
//! These models are the boundary between the data layer and the service and
//! controller layers. Entity models are converted at the repository boundary
//! and DTOs at the controller boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::property::{CreatePropertyDto, PropertyDto, PropertyImageDto, UpdatePropertyDto},
    server::error::AppError,
};

/// Status assigned to new properties when none is given.
pub const DEFAULT_STATUS: &str = "available";

/// Fields matched by the listing `searchTerm` parameter.
pub const SEARCHABLE_FIELDS: &[&str] = &["title", "address", "description"];

/// A stored file attached to a property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyImage {
    pub id: i32,
    pub property_id: i32,
    pub folder: String,
    pub path: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl PropertyImage {
    pub fn from_entity(entity: entity::property_image::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            folder: entity.folder,
            path: entity.path,
            content_type: entity.content_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PropertyImageDto {
        PropertyImageDto {
            id: self.id,
            folder: self.folder,
            path: self.path,
            content_type: self.content_type,
            created_at: self.created_at,
        }
    }
}

/// A property listing with its attached images.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub category: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub status: String,
    pub images: Vec<PropertyImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The property entity from the database
    /// - `images` - Image entities belonging to the property
    pub fn from_entity(
        entity: entity::property::Model,
        images: Vec<entity::property_image::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            address: entity.address,
            category: entity.category,
            price: entity.price,
            bedrooms: entity.bedrooms,
            bathrooms: entity.bathrooms,
            status: entity.status,
            images: images.into_iter().map(PropertyImage::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            title: self.title,
            description: self.description,
            address: self.address,
            category: self.category,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            status: self.status,
            images: self
                .images
                .into_iter()
                .map(PropertyImage::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated values for inserting or replacing a property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFields {
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub category: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub status: String,
}

impl PropertyFields {
    /// Trims text fields and rejects values a listing cannot have.
    ///
    /// # Returns
    /// - `Ok(PropertyFields)` - Normalized fields
    /// - `Err(AppError::BadRequest)` - A required field is blank, the price is negative or
    ///   not finite, or a room count is negative
    fn validated(self) -> Result<Self, AppError> {
        let fields = Self {
            title: self.title.trim().to_string(),
            description: self
                .description
                .map(|description| description.trim().to_string())
                .filter(|description| !description.is_empty()),
            address: self.address.trim().to_string(),
            category: self.category.trim().to_lowercase(),
            status: self.status.trim().to_lowercase(),
            ..self
        };

        for (name, value) in [
            ("title", &fields.title),
            ("address", &fields.address),
            ("category", &fields.category),
            ("status", &fields.status),
        ] {
            if value.is_empty() {
                return Err(AppError::BadRequest(format!("Property {} is required", name)));
            }
        }

        if !fields.price.is_finite() || fields.price < 0.0 {
            return Err(AppError::BadRequest(
                "Property price must be a non-negative number".to_string(),
            ));
        }

        if fields.bedrooms < 0 || fields.bathrooms < 0 {
            return Err(AppError::BadRequest(
                "Room counts cannot be negative".to_string(),
            ));
        }

        Ok(fields)
    }
}

/// Parameters for creating a property.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePropertyParam {
    pub fields: PropertyFields,
}

impl CreatePropertyParam {
    pub fn from_dto(dto: CreatePropertyDto) -> Result<Self, AppError> {
        let fields = PropertyFields {
            title: dto.title,
            description: dto.description,
            address: dto.address,
            category: dto.category,
            price: dto.price,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            status: dto.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
        .validated()?;

        Ok(Self { fields })
    }
}

/// Parameters for replacing an existing property's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePropertyParam {
    pub id: i32,
    pub fields: PropertyFields,
}

impl UpdatePropertyParam {
    pub fn from_dto(id: i32, dto: UpdatePropertyDto) -> Result<Self, AppError> {
        let fields = PropertyFields {
            title: dto.title,
            description: dto.description,
            address: dto.address,
            category: dto.category,
            price: dto.price,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            status: dto.status,
        }
        .validated()?;

        Ok(Self { id, fields })
    }
}
