use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto};
use crate::features::regions::services::RegionService;
use crate::shared::constants::REGION_CREATED;
use crate::shared::types::ApiResponse;
use crate::shared::validation::validate_request;

/// Create a region for an existing user
///
/// The region polygon is built from the owning user's coordinates.
#[utoipa::path(
    post,
    path = "/api/regions",
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Region created", body = ApiResponse<RegionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "regions"
)]
pub async fn create_region(
    State(service): State<Arc<RegionService>>,
    AppJson(dto): AppJson<CreateRegionDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegionResponseDto>>)> {
    validate_request(&dto)?;

    let region = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(region),
            Some(REGION_CREATED.to_string()),
        )),
    ))
}

/// Get a region by `regionId`
#[utoipa::path(
    get,
    path = "/api/regions/{region_id}",
    params(
        ("region_id" = String, Path, description = "Caller-supplied region identifier")
    ),
    responses(
        (status = 200, description = "Region found", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    Path(region_id): Path<String>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.find(&region_id).await?;
    Ok(Json(ApiResponse::success(Some(region), None)))
}
