use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::create_user))
        .route("/api/users/{user_id}", get(handlers::get_user))
        .with_state(service)
}
