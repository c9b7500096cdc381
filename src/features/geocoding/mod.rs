//! Address <-> coordinate resolution through an external geocoding provider.
//!
//! The provider is opaque: [`GeocodeProvider`] is the seam services depend
//! on, [`GeocodingService`] is the Nominatim-backed implementation used in
//! production.

pub mod models;
pub mod services;

pub use models::Coordinates;
pub use services::{GeocodeProvider, GeocodingService};
