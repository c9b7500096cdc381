use utoipa::{Modify, OpenApi};

use crate::features::geocoding::models as geocoding_models;
use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::create_user,
        users_handlers::get_user,
        // Regions
        regions_handlers::create_region,
        regions_handlers::get_region,
    ),
    components(
        schemas(
            // Geocoding
            geocoding_models::Coordinates,
            // Users
            users_dtos::CoordinatesDto,
            users_dtos::CreateUserDto,
            users_dtos::UserResponseDto,
            // Regions
            regions_dtos::CreateRegionDto,
            regions_dtos::RegionResponseDto,
            regions_models::GeometryKind,
            regions_models::PolygonGeometry,
            // Response wrappers
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<regions_dtos::RegionResponseDto>,
        )
    ),
    tags(
        (name = "users", description = "Users with geocoded addresses and coordinates"),
        (name = "regions", description = "Polygon regions owned by users"),
    ),
    info(
        title = "Geo Users API",
        version = "0.1.0",
        description = "Users with geocoded locations and their regions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
