use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::property, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Romzz API", description = "Property listings and uploads"),
    tags((name = "property", description = "Property listings, details, and uploaded files"))
)]
struct ApiDoc;

/// API routes grouped by path, each group documented from its handlers.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(property::get_properties, property::create_property))
        .routes(routes!(
            property::get_property,
            property::update_property,
            property::delete_property
        ))
        .routes(routes!(property::upload_property_images))
}

pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
