// Infrastructure kernel: dependency traits, the ServerDeps container,
// and mock implementations for tests.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{NominatimGeocoder, ServerDeps};
pub use test_dependencies::MockGeocoder;
pub use traits::{BaseGeocoder, Coordinates, GeocodeAddress};
