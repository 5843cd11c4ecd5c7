// MockGeocoder - mock geocoding implementation for testing
//
// Queued responses are returned in order; every call is recorded so tests
// can assert whether (and with what) the geocoder was invoked.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{BaseGeocoder, Coordinates, GeocodeAddress};

pub struct MockGeocoder {
    responses: Arc<Mutex<VecDeque<Result<Coordinates, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful geocode result.
    pub fn with_coordinates(self, latitude: f64, longitude: f64) -> Self {
        self.responses.lock().unwrap().push_back(Ok(Coordinates {
            latitude,
            longitude,
        }));
        self
    }

    /// Queue a geocode failure with the given message.
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Queries the geocoder was called with, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGeocoder for MockGeocoder {
    async fn resolve(&self, address: &GeocodeAddress) -> Result<Coordinates> {
        self.calls.lock().unwrap().push(address.to_query());

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("MockGeocoder: no response queued"))?;

        response.map_err(|message| anyhow!(message))
    }
}
