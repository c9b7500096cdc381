mod coordinates;

pub use coordinates::Coordinates;
