use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use crate::features::regions::dtos::RegionResponseDto;
use crate::features::regions::models::PolygonGeometry;

/// Database model for region
#[derive(Debug, Clone, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub region_id: String,
    /// Internal id of the owning user
    pub user_id: Uuid,
    pub name: String,
    pub region: Json<PolygonGeometry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new region
#[derive(Debug, Clone)]
pub struct NewRegion {
    pub region_id: String,
    pub user: Uuid,
    pub name: String,
    pub region: PolygonGeometry,
}

impl From<Region> for RegionResponseDto {
    fn from(r: Region) -> Self {
        Self {
            id: r.id,
            region_id: r.region_id,
            user: r.user_id,
            name: r.name,
            region: r.region.0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
