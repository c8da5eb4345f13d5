//! Bootcamp fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating bootcamp entity models without
//! database insertion. Useful for unit testing, mocking, and providing
//! consistent default values.

use chrono::Utc;
use entity::bootcamp::{self, Career, CareerList};

/// Default test bootcamp name.
pub const DEFAULT_NAME: &str = "Test Bootcamp";

/// Default test bootcamp slug.
pub const DEFAULT_SLUG: &str = "test-bootcamp";

/// Default test bootcamp description.
pub const DEFAULT_DESCRIPTION: &str = "A bootcamp used in tests";

/// Default stored latitude.
pub const DEFAULT_LAT: f64 = 42.3601;

/// Default stored longitude.
pub const DEFAULT_LNG: f64 = -71.0589;

/// Default photo filename.
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

/// Creates a bootcamp entity model with default values.
///
/// This function creates an in-memory bootcamp entity without inserting into
/// the database. Use this for unit tests and mocking repository responses.
///
/// # Returns
/// - `bootcamp::Model` - In-memory bootcamp entity
pub fn entity() -> bootcamp::Model {
    entity_builder().build()
}

/// Creates a bootcamp entity builder for customization.
///
/// Provides a builder pattern for creating bootcamp entities with custom
/// values while keeping sensible defaults for unspecified fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let bootcamp = fixture::bootcamp::entity_builder()
///     .name("Devworks")
///     .coordinates(40.71, -73.99)
///     .build();
/// ```
pub fn entity_builder() -> BootcampEntityBuilder {
    BootcampEntityBuilder::default()
}

/// Builder for creating customized bootcamp entity models.
pub struct BootcampEntityBuilder {
    id: i32,
    name: String,
    slug: String,
    description: String,
    careers: Vec<Career>,
    location_lat: f64,
    location_lng: f64,
    city: Option<String>,
}

impl Default for BootcampEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            slug: DEFAULT_SLUG.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            careers: vec![Career::WebDevelopment],
            location_lat: DEFAULT_LAT,
            location_lng: DEFAULT_LNG,
            city: Some("Boston".to_string()),
        }
    }
}

impl BootcampEntityBuilder {
    /// Sets the bootcamp ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the bootcamp name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the bootcamp slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the career list.
    pub fn careers(mut self, careers: Vec<Career>) -> Self {
        self.careers = careers;
        self
    }

    /// Sets the stored coordinates.
    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.location_lat = lat;
        self.location_lng = lng;
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    /// Builds the bootcamp entity model.
    pub fn build(self) -> bootcamp::Model {
        bootcamp::Model {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            website_work: None,
            website_profile: None,
            email: None,
            phone: None,
            careers: CareerList(self.careers),
            average_rating: None,
            average_cost: None,
            photo: DEFAULT_PHOTO.to_string(),
            housing: false,
            job_assistance: false,
            job_guarantee: false,
            accept_gi: false,
            location_lat: self.location_lat,
            location_lng: self.location_lng,
            formatted_address: None,
            street: None,
            city: self.city,
            state: None,
            zipcode: None,
            country: None,
            created_at: Utc::now(),
        }
    }
}
