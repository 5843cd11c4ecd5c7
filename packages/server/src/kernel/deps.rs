//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to domain
//! actions. The one external service (geocoding) sits behind a trait so
//! tests can swap in a mock.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use nominatim::{NominatimClient, NominatimOptions};
use sqlx::PgPool;

use crate::kernel::{BaseGeocoder, Coordinates, GeocodeAddress};

// =============================================================================
// NominatimClient Adapter (implements BaseGeocoder trait)
// =============================================================================

/// Wrapper around NominatimClient that implements the BaseGeocoder trait
pub struct NominatimGeocoder(NominatimClient);

impl NominatimGeocoder {
    pub fn new(options: NominatimOptions) -> Self {
        Self(NominatimClient::new(options))
    }

    /// Geocoder against an alternate Nominatim base URL (self-hosted, tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self::new(NominatimOptions {
            base_url,
            ..NominatimOptions::default()
        })
    }
}

#[async_trait]
impl BaseGeocoder for NominatimGeocoder {
    async fn resolve(&self, address: &GeocodeAddress) -> Result<Coordinates> {
        let place = self.0.search(&address.to_query()).await?;
        Ok(Coordinates {
            latitude: place.latitude,
            longitude: place.longitude,
        })
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub geocoder: Arc<dyn BaseGeocoder>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, geocoder: Arc<dyn BaseGeocoder>) -> Self {
        Self { db_pool, geocoder }
    }
}
