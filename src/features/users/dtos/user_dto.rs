use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::geocoding::Coordinates;
use crate::shared::constants::LOCATION_REQUIRED;
use crate::shared::validation::RequestSchema;

/// Coordinates as accepted in requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct CoordinatesDto {
    #[validate(range(min = -90.0, max = 90.0, message = "\"lat\" must be between -90 and 90"))]
    #[schema(example = -23.513803)]
    pub lat: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "\"lng\" must be between -180 and 180"
    ))]
    #[schema(example = -46.3684184)]
    pub lng: f64,
}

impl From<CoordinatesDto> for Coordinates {
    fn from(dto: CoordinatesDto) -> Self {
        Coordinates::new(dto.lat, dto.lng)
    }
}

/// Request DTO for creating a user
///
/// At least one of `address` / `coordinates` is required; the other is
/// resolved through the geocoding provider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_location", skip_on_field_errors = false))]
pub struct CreateUserDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "\"userId\" is required"))]
    #[schema(example = "1")]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "\"name\" is required"))]
    #[schema(example = "Roberto")]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "\"email\" is required"),
        email(message = "\"email\" must be a valid email")
    )]
    #[schema(example = "roberto.lopes@gmail.com")]
    pub email: String,

    #[schema(example = "Maria Aparecida Datovo, 478")]
    pub address: Option<String>,

    #[validate(nested)]
    pub coordinates: Option<CoordinatesDto>,
}

impl CreateUserDto {
    /// Address with blank values treated as absent
    pub fn provided_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

fn validate_location(dto: &CreateUserDto) -> Result<(), ValidationError> {
    if dto.provided_address().is_none() && dto.coordinates.is_none() {
        let mut error = ValidationError::new("location_required");
        error.message = Some(LOCATION_REQUIRED.into());
        return Err(error);
    }
    Ok(())
}

impl RequestSchema for CreateUserDto {
    const FIELD_ORDER: &'static [&'static str] =
        &["userId", "name", "email", "address", "coordinates"];
}

/// Response DTO for user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::validation::validate_request;

    fn parse(body: serde_json::Value) -> CreateUserDto {
        serde_json::from_value(body).unwrap()
    }

    fn validation_message(dto: &CreateUserDto) -> String {
        match validate_request(dto).unwrap_err() {
            AppError::Validation { message, .. } => message,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_user_id_is_reported_first() {
        let dto = parse(serde_json::json!({ "nome": "Roberto" }));
        assert_eq!(validation_message(&dto), "\"userId\" is required");
    }

    #[test]
    fn test_address_only_is_valid() {
        let dto = parse(serde_json::json!({
            "userId": "1",
            "name": "Roberto",
            "email": "roberto.lopes@gmail.com",
            "address": "Maria Aparecida Datovo, 478"
        }));
        assert!(validate_request(&dto).is_ok());
    }

    #[test]
    fn test_coordinates_only_is_valid() {
        let dto = parse(serde_json::json!({
            "userId": "1",
            "name": "Roberto",
            "email": "roberto.lopes@gmail.com",
            "coordinates": { "lat": -23.513803, "lng": -46.3684184 }
        }));
        assert!(validate_request(&dto).is_ok());
    }

    #[test]
    fn test_location_is_required() {
        let dto = parse(serde_json::json!({
            "userId": "1",
            "name": "Roberto",
            "email": "roberto.lopes@gmail.com",
            "address": "   "
        }));
        assert_eq!(validation_message(&dto), LOCATION_REQUIRED);
    }

    #[test]
    fn test_invalid_email() {
        let dto = parse(serde_json::json!({
            "userId": "1",
            "name": "Roberto",
            "email": "not-an-email",
            "address": "Maria Aparecida Datovo, 478"
        }));
        assert_eq!(validation_message(&dto), "\"email\" must be a valid email");
    }

    #[test]
    fn test_out_of_range_latitude() {
        let dto = parse(serde_json::json!({
            "userId": "1",
            "name": "Roberto",
            "email": "roberto.lopes@gmail.com",
            "coordinates": { "lat": 123.0, "lng": -46.3684184 }
        }));
        assert_eq!(validation_message(&dto), "\"lat\" must be between -90 and 90");
    }

    #[test]
    fn test_provided_address_trims() {
        let dto = parse(serde_json::json!({ "address": "  Rua A, 1  " }));
        assert_eq!(dto.provided_address(), Some("Rua A, 1"));
    }
}
