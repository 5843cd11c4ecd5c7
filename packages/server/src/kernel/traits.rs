// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like therapist onboarding) should be domain functions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGeocoder)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Geocoder Trait (Infrastructure - postal address to coordinates)
// =============================================================================

/// Structured postal address submitted for geocoding.
#[derive(Debug, Clone)]
pub struct GeocodeAddress {
    pub line_one: String,
    pub line_two: Option<String>,
    pub city: String,
    /// USPS state abbreviation (e.g. "MN").
    pub state_abbreviation: String,
    pub zip: String,
}

impl GeocodeAddress {
    /// Free-form query string for the geocoding provider.
    pub fn to_query(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.line_one.trim(),
            self.city.trim(),
            self.state_abbreviation.trim(),
            self.zip.trim()
        )
    }
}

/// Latitude/longitude pair returned by the geocoding provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait BaseGeocoder: Send + Sync {
    /// Resolve a postal address to coordinates.
    ///
    /// Single attempt, no retry policy; the caller decides how to treat
    /// failure. Implementations bound the call with a timeout and report a
    /// timeout as an ordinary failure.
    async fn resolve(&self, address: &GeocodeAddress) -> Result<Coordinates>;
}
