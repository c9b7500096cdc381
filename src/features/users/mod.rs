//! Users with a geocoded location.
//!
//! A user is created with an address, coordinates, or both; whichever is
//! missing is resolved through the geocoding provider before the record is
//! stored.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users` | Create a user (address and/or coordinates) |
//! | GET | `/api/users/{userId}` | Get a user by its `userId` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgUserRepository, UserRepository};
pub use services::UserService;
