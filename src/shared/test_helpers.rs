//! In-memory doubles and router wiring for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::geocoding::{Coordinates, GeocodeProvider};
use crate::features::regions::dtos::CreateRegionDto;
use crate::features::regions::models::{NewRegion, Region};
use crate::features::regions::{routes as regions_routes, RegionRepository, RegionService};
use crate::features::users::dtos::{CoordinatesDto, CreateUserDto, UserResponseDto};
use crate::features::users::models::{NewUser, User};
use crate::features::users::{routes as users_routes, UserRepository, UserService};

pub const STUB_ADDRESS: &str = "Rua Maria Aparecida Datovo, 478 - Suzano, SP, Brasil";

pub const STUB_COORDINATES: Coordinates = Coordinates {
    lat: -23.513803,
    lng: -46.3684184,
};

/// Geocoder answering every lookup with fixed values and counting calls
#[derive(Default)]
pub struct StubGeocoder {
    forward: AtomicUsize,
    reverse: AtomicUsize,
}

impl StubGeocoder {
    pub fn forward_calls(&self) -> usize {
        self.forward.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeProvider for StubGeocoder {
    async fn address_from_coordinates(&self, _coordinates: &Coordinates) -> Result<String> {
        self.reverse.fetch_add(1, Ordering::SeqCst);
        Ok(STUB_ADDRESS.to_string())
    }

    async fn coordinates_from_address(&self, _address: &str) -> Result<Coordinates> {
        self.forward.fetch_add(1, Ordering::SeqCst);
        Ok(STUB_COORDINATES)
    }
}

/// Geocoder whose provider is always down
pub struct FailingGeocoder;

#[async_trait]
impl GeocodeProvider for FailingGeocoder {
    async fn address_from_coordinates(&self, _coordinates: &Coordinates) -> Result<String> {
        Err(AppError::ExternalServiceError(
            "Geocoding request failed: connection refused".to_string(),
        ))
    }

    async fn coordinates_from_address(&self, _address: &str) -> Result<Coordinates> {
        Err(AppError::ExternalServiceError(
            "Geocoding request failed: connection refused".to_string(),
        ))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Store a user directly, bypassing geocoding
    pub fn insert(
        &self,
        user_id: &str,
        address: Option<&str>,
        coordinates: Option<Coordinates>,
    ) -> User {
        self.store(
            user_id,
            "Roberto",
            "roberto.lopes@gmail.com",
            address.map(str::to_string),
            coordinates,
        )
    }

    fn store(
        &self,
        user_id: &str,
        name: &str,
        email: &str,
        address: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            address,
            lat: coordinates.map(|c| c.lat),
            lng: coordinates.map(|c| c.lng),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        Ok(self.store(
            &user.user_id,
            &user.name,
            &user.email,
            Some(user.address),
            Some(user.coordinates),
        ))
    }
}

#[derive(Default)]
pub struct InMemoryRegionRepository {
    regions: Mutex<Vec<Region>>,
}

impl InMemoryRegionRepository {
    pub fn len(&self) -> usize {
        self.regions.lock().unwrap().len()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn find(&self, region_id: &str) -> Result<Option<Region>> {
        Ok(self
            .regions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.region_id == region_id)
            .cloned())
    }

    async fn create(&self, region: NewRegion) -> Result<Region> {
        let now = Utc::now();
        let region = Region {
            id: Uuid::new_v4(),
            region_id: region.region_id,
            user_id: region.user,
            name: region.name,
            region: Json(region.region),
            created_at: now,
            updated_at: now,
        };
        self.regions.lock().unwrap().push(region.clone());
        Ok(region)
    }
}

/// A user request with no location; tests fill in address/coordinates
pub fn user_request(user_id: &str) -> CreateUserDto {
    CreateUserDto {
        user_id: user_id.to_string(),
        name: "Roberto".to_string(),
        email: "roberto.lopes@gmail.com".to_string(),
        address: None,
        coordinates: None,
    }
}

pub fn region_request(region_id: &str, user_id: &str) -> CreateRegionDto {
    CreateRegionDto {
        region_id: region_id.to_string(),
        name: "Home".to_string(),
        user_id: user_id.to_string(),
    }
}

/// Services wired to in-memory repositories, plus the router serving them
pub struct TestContext {
    pub users: Arc<InMemoryUserRepository>,
    pub regions: Arc<InMemoryRegionRepository>,
    pub user_service: Arc<UserService>,
    pub region_service: Arc<RegionService>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_geocoder(Arc::new(StubGeocoder::default()))
    }

    pub fn with_failing_geocoder() -> Self {
        Self::with_geocoder(Arc::new(FailingGeocoder))
    }

    pub fn with_geocoder(geocoder: Arc<dyn GeocodeProvider>) -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let regions = Arc::new(InMemoryRegionRepository::default());
        let user_service = Arc::new(UserService::new(users.clone(), geocoder));
        let region_service = Arc::new(RegionService::new(regions.clone(), users.clone()));

        Self {
            users,
            regions,
            user_service,
            region_service,
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .merge(users_routes::routes(Arc::clone(&self.user_service)))
            .merge(regions_routes::routes(Arc::clone(&self.region_service)))
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Create a user through the service with coordinates supplied
    pub async fn seed_user(&self, user_id: &str) -> UserResponseDto {
        let mut dto = user_request(user_id);
        dto.coordinates = Some(CoordinatesDto {
            lat: STUB_COORDINATES.lat,
            lng: STUB_COORDINATES.lng,
        });
        self.user_service.create(dto).await.unwrap()
    }
}
