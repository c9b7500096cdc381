use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions", post(handlers::create_region))
        .route("/api/regions/{region_id}", get(handlers::get_region))
        .with_state(service)
}
