use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::constants::USER_CREATED;
use crate::shared::types::ApiResponse;
use crate::shared::validation::validate_request;

/// Create a user
///
/// Either `address` or `coordinates` must be supplied; the missing one is
/// resolved through the geocoding provider.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Geocoding provider failure")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    validate_request(&dto)?;

    let user = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user),
            Some(USER_CREATED.to_string()),
        )),
    ))
}

/// Get a user by `userId`
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "Caller-supplied user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.find(&user_id).await?;
    Ok(Json(ApiResponse::success(Some(user), None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use serde_json::{json, Value};

    use crate::shared::constants::USER_NOT_FOUND;
    use crate::shared::test_helpers::{TestContext, STUB_ADDRESS};

    #[tokio::test]
    async fn test_missing_user_data_returns_bad_request() {
        let ctx = TestContext::new();
        let server = ctx.server();

        // Every required field is missing; "nome" is not a known field
        let response = server
            .post("/api/users")
            .json(&json!({ "nome": "Roberto" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "\"userId\" is required");
        assert_eq!(ctx.users.len(), 0);
    }

    #[tokio::test]
    async fn test_create_user_with_address() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server
            .post("/api/users")
            .json(&json!({
                "userId": "1",
                "name": "Roberto",
                "email": "roberto.lopes@gmail.com",
                "address": "Maria Aparecida Datovo, 478"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["userId"], "1");
        assert_eq!(data["address"], "Maria Aparecida Datovo, 478");
        assert!(data["coordinates"]["lat"].is_f64());
        assert!(data["coordinates"]["lng"].is_f64());
    }

    #[tokio::test]
    async fn test_create_user_with_coordinates() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server
            .post("/api/users")
            .json(&json!({
                "userId": "1",
                "name": "Roberto",
                "email": "roberto.lopes@gmail.com",
                "coordinates": { "lat": -23.513803, "lng": -46.3684184 }
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["address"], STUB_ADDRESS);
        assert_eq!(data["coordinates"]["lat"], -23.513803);
        assert_eq!(data["coordinates"]["lng"], -46.3684184);
    }

    #[tokio::test]
    async fn test_create_user_without_location_returns_bad_request() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let response = server
            .post("/api/users")
            .json(&json!({ "userId": "7", "name": name, "email": email }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "\"address\" or \"coordinates\" is required");
    }

    #[tokio::test]
    async fn test_malformed_coordinates_return_bad_request() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server
            .post("/api/users")
            .json(&json!({
                "userId": "1",
                "name": "Roberto",
                "email": "roberto.lopes@gmail.com",
                "coordinates": { "lat": "south" }
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_geocoder_failure_returns_bad_gateway() {
        let ctx = TestContext::with_failing_geocoder();
        let server = ctx.server();

        let response = server
            .post("/api/users")
            .json(&json!({
                "userId": "1",
                "name": "Roberto",
                "email": "roberto.lopes@gmail.com",
                "address": "Maria Aparecida Datovo, 478"
            }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(ctx.users.len(), 0);
    }

    #[tokio::test]
    async fn test_get_user() {
        let ctx = TestContext::new();
        let server = ctx.server();
        ctx.seed_user("9").await;

        let response = server.get("/api/users/9").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["userId"], "9");

        let response = server.get("/api/users/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], USER_NOT_FOUND);
    }
}
