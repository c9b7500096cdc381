use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::geocoding::Coordinates;

/// Minimum number of positions in a closed GeoJSON linear ring
const MIN_RING_POSITIONS: usize = 4;

/// GeoJSON geometry type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeometryKind {
    Polygon,
}

/// GeoJSON (RFC 7946) polygon: a list of linear rings of `[lng, lat]` positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

impl PolygonGeometry {
    /// Degenerate polygon covering a single point.
    ///
    /// The exterior ring repeats the point so it is closed and has the
    /// minimum length a linear ring allows.
    pub fn from_point(point: Coordinates) -> Self {
        let position = point.to_position().to_vec();
        Self {
            kind: GeometryKind::Polygon,
            coordinates: vec![vec![position; MIN_RING_POSITIONS]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point_builds_closed_ring() {
        let polygon = PolygonGeometry::from_point(Coordinates::new(-23.513803, -46.3684184));

        let ring = &polygon.coordinates[0];
        assert_eq!(polygon.coordinates.len(), 1);
        assert_eq!(ring.len(), MIN_RING_POSITIONS);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0], vec![-46.3684184, -23.513803]);
    }

    #[test]
    fn test_serializes_as_geojson() {
        let polygon = PolygonGeometry::from_point(Coordinates::new(1.5, 2.5));
        let value = serde_json::to_value(&polygon).unwrap();

        assert_eq!(value["type"], "Polygon");
        assert_eq!(value["coordinates"][0][0], serde_json::json!([2.5, 1.5]));

        let back: PolygonGeometry = serde_json::from_value(value).unwrap();
        assert_eq!(back, polygon);
    }
}
