use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        property::{
            CreatePropertyDto, PaginatedPropertiesDto, PropertyDto, PropertyImageDto,
            UpdatePropertyDto, UploadPropertyFilesDto,
        },
    },
    server::{
        error::AppError,
        model::property::{CreatePropertyParam, UpdatePropertyParam},
        query::QueryParams,
        service::{property::PropertyService, property_image::PropertyImageService},
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// List properties.
///
/// Returns one page of properties narrowed by the query parameters. Any parameter
/// not listed below is matched against the property field of the same name; a
/// comma separated value matches any of its entries. Unknown fields are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Listing parameters from the querystring
///
/// # Returns
/// - `200 OK` - Pagination metadata and the matching properties
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(
        ("searchTerm" = Option<String>, Query, description = "Case-insensitive text matched against title, address, and description"),
        ("price" = Option<String>, Query, description = "Inclusive price range as min-max, e.g. 100-500"),
        ("sort" = Option<String>, Query, description = "Comma separated fields, '-' prefix for descending (default: -createdAt)"),
        ("fields" = Option<String>, Query, description = "Comma separated fields to return, '-' prefix to exclude"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Category or comma separated categories"),
        ("status" = Option<String>, Query, description = "Status or comma separated statuses")
    ),
    responses(
        (status = 200, description = "Successfully retrieved properties", body = PaginatedPropertiesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PropertyService::new(&state.db)
        .get_paginated(&params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedPropertiesDto {
            meta: page.meta.into_dto(),
            result: page.result,
        }),
    ))
}

/// Get a property with its images.
///
/// # Returns
/// - `200 OK` - The property
/// - `404 Not Found` - Property does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved property", body = PropertyDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let property = PropertyService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Create a property.
///
/// Title, address, and category are required and trimmed; category and status are
/// stored in lowercase. Status defaults to `available`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Property creation data
///
/// # Returns
/// - `201 Created` - Successfully created property
/// - `400 Bad Request` - Blank required field, or negative price or room count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = CreatePropertyDto,
    responses(
        (status = 201, description = "Successfully created property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<CreatePropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePropertyParam::from_dto(payload)?;
    let property = PropertyService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(property.into_dto())))
}

/// Replace a property's fields.
///
/// # Returns
/// - `200 OK` - Successfully updated property
/// - `400 Bad Request` - Invalid property data
/// - `404 Not Found` - Property does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    request_body = UpdatePropertyDto,
    responses(
        (status = 200, description = "Successfully updated property", body = PropertyDto),
        (status = 400, description = "Invalid property data", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePropertyDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePropertyParam::from_dto(id, payload)?;
    let property = PropertyService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}

/// Delete a property along with its images and their stored files.
///
/// # Returns
/// - `204 No Content` - Successfully deleted property
/// - `404 Not Found` - Property does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted property"),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PropertyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload files for a property.
///
/// Accepts a multipart body with one or more file parts. Each file is stored in
/// the `image`, `media`, or `doc` folder according to its MIME type. If any file is
/// rejected, none of the files from the request are kept.
///
/// # Arguments
/// - `state` - Application state containing the database connection and upload root
/// - `id` - Property ID to attach the files to
/// - `multipart` - Multipart request body
///
/// # Returns
/// - `201 Created` - The stored files
/// - `400 Bad Request` - Unsupported file type, unnamed file, or no files
/// - `404 Not Found` - Property does not exist
/// - `500 Internal Server Error` - Filesystem or database error
#[utoipa::path(
    post,
    path = "/api/properties/{id}/images",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    request_body(content = UploadPropertyFilesDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully stored files", body = Vec<PropertyImageDto>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_property_images(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let images = PropertyImageService::new(&state.db, state.upload_dir.as_path())
        .upload(id, multipart)
        .await?;

    let images: Vec<PropertyImageDto> = images.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::CREATED, Json(images)))
}
