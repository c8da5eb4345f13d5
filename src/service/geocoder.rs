//! Geocoding collaborator.
//!
//! Resolves a free-text address or postal code to candidate matches with
//! coordinates and administrative fields. The HTTP implementation speaks the
//! MapQuest address-geocoding API; the trait seam exists so tests can
//! substitute a stub provider.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// One candidate match returned by the geocoding collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

/// Errors from the geocoding collaborator.
///
/// All variants are surfaced to the caller as 502 Bad Gateway; no retries.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Transport-level failure talking to the geocoding service.
    #[error("Geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoding service answered with a non-success status.
    #[error("Geocoding service returned status {0}")]
    BadStatus(u16),

    /// The geocoding service returned an empty candidate list.
    #[error("No geocoding results for '{0}'")]
    NoResults(String),
}

/// Geocoding collaborator interface.
///
/// Given a free-text address or postal code, returns the candidate matches in
/// the order the upstream service ranked them.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, location: &str) -> Result<Vec<GeocodeResult>, GeocodeError>;
}

/// MapQuest-backed geocoder.
pub struct MapQuestGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MapQuestGeocoder {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.geocoder_url.clone(),
            api_key: config.geocoder_api_key.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, location: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("location", location)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::BadStatus(response.status().as_u16()));
        }

        let body: MapQuestResponse = response.json().await?;

        let results: Vec<GeocodeResult> = body
            .results
            .into_iter()
            .flat_map(|r| r.locations)
            .map(MapQuestLocation::into_result)
            .collect();

        if results.is_empty() {
            return Err(GeocodeError::NoResults(location.to_string()));
        }

        Ok(results)
    }
}

#[derive(Deserialize)]
struct MapQuestResponse {
    #[serde(default)]
    results: Vec<MapQuestResult>,
}

#[derive(Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Deserialize)]
struct MapQuestLocation {
    #[serde(rename = "latLng")]
    lat_lng: MapQuestLatLng,
    street: Option<String>,
    /// City per the MapQuest administrative-area numbering.
    #[serde(rename = "adminArea5")]
    admin_area5: Option<String>,
    /// State.
    #[serde(rename = "adminArea3")]
    admin_area3: Option<String>,
    /// Country.
    #[serde(rename = "adminArea1")]
    admin_area1: Option<String>,
    #[serde(rename = "postalCode")]
    postal_code: Option<String>,
}

#[derive(Deserialize)]
struct MapQuestLatLng {
    lat: f64,
    lng: f64,
}

impl MapQuestLocation {
    /// Maps a MapQuest location into the neutral result shape.
    ///
    /// MapQuest has no single formatted-address field; it is composed from the
    /// non-empty administrative parts.
    fn into_result(self) -> GeocodeResult {
        let formatted_address = {
            let parts: Vec<&str> = [
                self.street.as_deref(),
                self.admin_area5.as_deref(),
                self.admin_area3.as_deref(),
                self.postal_code.as_deref(),
                self.admin_area1.as_deref(),
            ]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        };

        GeocodeResult {
            latitude: self.lat_lng.lat,
            longitude: self.lat_lng.lng,
            formatted_address,
            street: self.street.filter(|s| !s.is_empty()),
            city: self.admin_area5.filter(|s| !s.is_empty()),
            state: self.admin_area3.filter(|s| !s.is_empty()),
            zipcode: self.postal_code.filter(|s| !s.is_empty()),
            country: self.admin_area1.filter(|s| !s.is_empty()),
        }
    }
}
