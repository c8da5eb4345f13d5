use std::sync::Mutex;

use async_trait::async_trait;

use crate::service::geocoder::{GeocodeError, GeocodeResult, Geocoder};


/// Geocoder stand-in resolving every query to a canned result.
///
/// Records the queries it receives so tests can assert when the service does
/// and does not reach for geocoding.
pub struct StubGeocoder {
    result: Option<GeocodeResult>,
    queries: Mutex<Vec<String>>,
}

impl StubGeocoder {
    /// Stub resolving every query to the given result.
    pub fn returning(result: GeocodeResult) -> Self {
        Self {
            result: Some(result),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Stub resolving every query to a fixed Boston location.
    pub fn boston() -> Self {
        Self::returning(GeocodeResult {
            latitude: 42.3601,
            longitude: -71.0589,
            formatted_address: Some("233 Bay State Rd, Boston, MA, 02215, US".to_string()),
            street: Some("233 Bay State Rd".to_string()),
            city: Some("Boston".to_string()),
            state: Some("MA".to_string()),
            zipcode: Some("02215".to_string()),
            country: Some("US".to_string()),
        })
    }

    /// Stub failing every query with an empty candidate list.
    pub fn failing() -> Self {
        Self {
            result: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, location: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        self.queries.lock().unwrap().push(location.to_string());

        match &self.result {
            Some(result) => Ok(vec![result.clone()]),
            None => Err(GeocodeError::NoResults(location.to_string())),
        }
    }
}
