use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto};
use crate::features::regions::models::{NewRegion, PolygonGeometry};
use crate::features::regions::repositories::RegionRepository;
use crate::features::users::UserRepository;
use crate::shared::constants::{REGION_NOT_FOUND, USER_NOT_FOUND};

/// Service for creating and looking up regions
pub struct RegionService {
    regions: Arc<dyn RegionRepository>,
    users: Arc<dyn UserRepository>,
}

impl RegionService {
    pub fn new(regions: Arc<dyn RegionRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { regions, users }
    }

    /// Create a region whose polygon is derived from the owning user's coordinates
    pub async fn create(&self, dto: CreateRegionDto) -> Result<RegionResponseDto> {
        tracing::info!(region_id = %dto.region_id, user_id = %dto.user_id, "Creating region");

        let user = self.users.find(&dto.user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %dto.user_id, "Region owner not found");
            AppError::NotFound(USER_NOT_FOUND.to_string())
        })?;

        let coordinates = user.coordinates().ok_or_else(|| {
            tracing::warn!(user_id = %user.user_id, "Region owner has no coordinates");
            AppError::BadRequest(format!(
                "User '{}' has no coordinates to build a region from",
                user.user_id
            ))
        })?;

        let region = self
            .regions
            .create(NewRegion {
                region_id: dto.region_id,
                user: user.id,
                name: dto.name,
                region: PolygonGeometry::from_point(coordinates),
            })
            .await?;

        Ok(region.into())
    }

    /// Get a region by its `regionId`
    pub async fn find(&self, region_id: &str) -> Result<RegionResponseDto> {
        self.regions
            .find(region_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                tracing::debug!(region_id, "Region lookup missed");
                AppError::NotFound(REGION_NOT_FOUND.to_string())
            })
    }
}
