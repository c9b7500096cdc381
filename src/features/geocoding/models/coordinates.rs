use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A WGS84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    #[schema(example = -23.513803)]
    pub lat: f64,
    #[schema(example = -46.3684184)]
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON position, longitude first
    pub fn to_position(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
