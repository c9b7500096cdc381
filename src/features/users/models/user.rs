use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::geocoding::Coordinates;
use crate::features::users::dtos::UserResponseDto;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Stored coordinates, if both components are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lng?))
    }
}

/// Data for creating a new user; location is fully resolved at this point
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub coordinates: Coordinates,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        let coordinates = u.coordinates();
        Self {
            id: u.id,
            user_id: u.user_id,
            name: u.name,
            email: u.email,
            address: u.address,
            coordinates,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
