//! Regions owned by users.
//!
//! A region is a GeoJSON polygon built from its owner's coordinates and
//! linked to the owner's internal id.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/regions` | Create a region for an existing user |
//! | GET | `/api/regions/{regionId}` | Get a region by its `regionId` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgRegionRepository, RegionRepository};
pub use services::RegionService;
