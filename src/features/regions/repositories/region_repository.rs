use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{NewRegion, Region};

/// Persistence access for regions
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Find a region by its caller-supplied `regionId`
    async fn find(&self, region_id: &str) -> Result<Option<Region>>;

    /// Store a new region and return the persisted record
    async fn create(&self, region: NewRegion) -> Result<Region>;
}

/// Postgres-backed region repository; geometry is stored as JSONB
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn find(&self, region_id: &str) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, region_id, user_id, name, region, created_at, updated_at
            FROM regions
            WHERE region_id = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(region_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find region: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, region: NewRegion) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (region_id, user_id, name, region)
            VALUES ($1, $2, $3, $4)
            RETURNING id, region_id, user_id, name, region, created_at, updated_at
            "#,
        )
        .bind(&region.region_id)
        .bind(region.user)
        .bind(&region.name)
        .bind(Json(&region.region))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create region: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(id = %region.id, region_id = %region.region_id, "Region stored");

        Ok(region)
    }
}
