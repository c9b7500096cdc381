use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::geocoding::{Coordinates, GeocodeProvider};
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::models::NewUser;
use crate::features::users::repositories::UserRepository;
use crate::shared::constants::{LOCATION_REQUIRED, USER_NOT_FOUND};

/// Service for creating and looking up users
pub struct UserService {
    users: Arc<dyn UserRepository>,
    geocoder: Arc<dyn GeocodeProvider>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, geocoder: Arc<dyn GeocodeProvider>) -> Self {
        Self { users, geocoder }
    }

    /// Create a user, geocoding whichever of address/coordinates is missing
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        tracing::info!(
            user_id = %dto.user_id,
            has_address = dto.provided_address().is_some(),
            has_coordinates = dto.coordinates.is_some(),
            "Creating user"
        );

        let address = dto.provided_address().map(str::to_string);
        let coordinates = dto.coordinates.map(Coordinates::from);
        let (address, coordinates) = self
            .resolve_location(address, coordinates)
            .await
            .map_err(|e| {
                tracing::warn!(user_id = %dto.user_id, "Failed to resolve user location: {}", e);
                e
            })?;

        let user = self
            .users
            .create(NewUser {
                user_id: dto.user_id,
                name: dto.name,
                email: dto.email,
                address,
                coordinates,
            })
            .await?;

        Ok(user.into())
    }

    /// Get a user by its `userId`
    pub async fn find(&self, user_id: &str) -> Result<UserResponseDto> {
        self.users
            .find(user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                tracing::debug!(user_id, "User lookup missed");
                AppError::NotFound(USER_NOT_FOUND.to_string())
            })
    }

    /// Fill in the missing half of a location with at most one provider call
    async fn resolve_location(
        &self,
        address: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> Result<(String, Coordinates)> {
        match (address, coordinates) {
            (Some(address), Some(coordinates)) => Ok((address, coordinates)),
            (None, Some(coordinates)) => {
                let address = self.geocoder.address_from_coordinates(&coordinates).await?;
                tracing::debug!(%coordinates, %address, "Resolved address from coordinates");
                Ok((address, coordinates))
            }
            (Some(address), None) => {
                let coordinates = self.geocoder.coordinates_from_address(&address).await?;
                tracing::debug!(%coordinates, %address, "Resolved coordinates from address");
                Ok((address, coordinates))
            }
            (None, None) => Err(AppError::validation(LOCATION_REQUIRED)),
        }
    }
}
