pub mod geocoding;
pub mod regions;
pub mod users;
