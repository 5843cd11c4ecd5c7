use serde::Deserialize;

/// Raw search result as Nominatim returns it (coordinates are strings).
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// A place resolved to numeric coordinates.
#[derive(Debug, Clone)]
pub struct ResolvedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}
