pub mod models;

pub use models::{CreateLocation, Location, LocationType};
