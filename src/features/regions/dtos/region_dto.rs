use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::models::PolygonGeometry;
use crate::shared::validation::RequestSchema;

/// Request DTO for creating a region
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "\"regionId\" is required"))]
    #[schema(example = "r-1")]
    pub region_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "\"name\" is required"))]
    #[schema(example = "Home")]
    pub name: String,

    /// `userId` of the owning user
    #[serde(default)]
    #[validate(length(min = 1, message = "\"userId\" is required"))]
    #[schema(example = "1")]
    pub user_id: String,
}

impl RequestSchema for CreateRegionDto {
    const FIELD_ORDER: &'static [&'static str] = &["regionId", "name", "userId"];
}

/// Response DTO for region
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: Uuid,
    pub region_id: String,
    /// Internal id of the owning user
    pub user: Uuid,
    pub name: String,
    pub region: PolygonGeometry,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
