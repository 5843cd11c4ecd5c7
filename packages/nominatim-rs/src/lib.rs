// Minimal client for the Nominatim (OpenStreetMap) search API.
// https://nominatim.org/release-docs/latest/api/Search/

use std::time::Duration;

pub mod models;

use reqwest::Client;

use crate::models::{NominatimPlace, ResolvedPlace};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Errors returned by the Nominatim client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("location not found: {query}")]
    NotFound { query: String },

    #[error("invalid coordinate in geocoding response: {0}")]
    InvalidCoordinate(String),
}

#[derive(Debug, Clone)]
pub struct NominatimOptions {
    /// Base URL of the Nominatim instance (override for self-hosted or tests).
    pub base_url: String,
    /// User-Agent sent with every request; Nominatim's usage policy requires one.
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for NominatimOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "HarborviewWellness/1.0 (Therapist Directory)".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    options: NominatimOptions,
    client: Client,
}

impl NominatimClient {
    pub fn new(options: NominatimOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    /// Resolve a free-form query to coordinates, taking the best match.
    ///
    /// Returns `NotFound` when Nominatim has no result for the query.
    pub async fn search(&self, query: &str) -> Result<ResolvedPlace, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.options.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .header("User-Agent", &self.options.user_agent)
            .timeout(self.options.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let place = places.into_iter().next().ok_or_else(|| GeocodeError::NotFound {
            query: query.to_string(),
        })?;

        let latitude: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(place.lat.clone()))?;
        let longitude: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(place.lon.clone()))?;

        Ok(ResolvedPlace {
            latitude,
            longitude,
            display_name: place.display_name,
        })
    }
}
