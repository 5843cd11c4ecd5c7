pub mod location;
pub mod reference;

pub use location::{CreateLocation, Location};
pub use reference::{resolve_location_type_id, resolve_state_code, LocationType, UsState};
