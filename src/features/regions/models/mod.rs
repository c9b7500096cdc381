mod geometry;
mod region;

pub use geometry::{GeometryKind, PolygonGeometry};
pub use region::{NewRegion, Region};
