//! Bootcamp business logic.
//!
//! Runs the explicit write pipeline the persistence layer requires: validate
//! (done by the parameter types), derive the slug, geocode the address into a
//! location, then write. Slug derivation and geocoding are independent, but
//! both complete before anything is made durable.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::bootcamp::BootcampRepository,
    error::{validation::ValidationError, AppError},
    model::bootcamp::{
        Bootcamp, BootcampChanges, CreateBootcampParams, Location, NewBootcamp,
        UpdateBootcampParams,
    },
    service::geocoder::{GeocodeError, GeocodeResult, Geocoder},
    util::{geo::EARTH_RADIUS_MILES, slug::slugify},
};

pub struct BootcampService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a dyn Geocoder,
}

impl<'a> BootcampService<'a> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a dyn Geocoder) -> Self {
        Self { db, geocoder }
    }

    /// Creates a bootcamp from validated parameters.
    ///
    /// Derives the slug, geocodes the address (the address itself is dropped
    /// here and never persisted), and inserts the enriched record. A unique
    /// constraint violation on the name surfaces as a validation error and
    /// nothing is written.
    pub async fn create(&self, params: CreateBootcampParams) -> Result<Bootcamp, AppError> {
        let slug = slugify(&params.name);
        let location = self.resolve_location(&params.address).await?;

        let record = NewBootcamp {
            name: params.name.clone(),
            slug,
            description: params.description,
            careers: params.careers,
            website: params.website,
            email: params.email,
            phone: params.phone,
            average_rating: params.average_rating,
            average_cost: params.average_cost,
            photo: params.photo,
            housing: params.housing,
            job_assistance: params.job_assistance,
            job_guarantee: params.job_guarantee,
            accept_gi: params.accept_gi,
            location,
        };

        let repo = BootcampRepository::new(self.db);

        let model = repo
            .insert(record)
            .await
            .map_err(|err| duplicate_name_or(err, &params.name))?;

        Ok(Bootcamp::from_entity(model))
    }

    /// Gets all bootcamps.
    pub async fn get_all(&self) -> Result<Vec<Bootcamp>, AppError> {
        let repo = BootcampRepository::new(self.db);

        let models = repo.get_all().await?;

        Ok(models.into_iter().map(Bootcamp::from_entity).collect())
    }

    /// Gets a bootcamp by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Bootcamp, AppError> {
        let repo = BootcampRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(Bootcamp::from_entity(model))
    }

    /// Updates a bootcamp from validated parameters.
    ///
    /// A supplied name re-derives the slug; a supplied address is re-geocoded
    /// and then dropped, exactly as on create. Fields not supplied are left
    /// untouched.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBootcampParams,
    ) -> Result<Bootcamp, AppError> {
        let repo = BootcampRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let slug = params.name.as_deref().map(slugify);
        let location = match &params.address {
            Some(address) => Some(self.resolve_location(address).await?),
            None => None,
        };

        let changes = BootcampChanges {
            name: params.name.clone(),
            slug,
            description: params.description,
            careers: params.careers,
            website: params.website,
            email: params.email,
            phone: params.phone,
            average_rating: params.average_rating,
            average_cost: params.average_cost,
            photo: params.photo,
            housing: params.housing,
            job_assistance: params.job_assistance,
            job_guarantee: params.job_guarantee,
            accept_gi: params.accept_gi,
            location,
        };

        let model = repo.update(existing, changes).await.map_err(|err| {
            duplicate_name_or(err, params.name.as_deref().unwrap_or_default())
        })?;

        Ok(Bootcamp::from_entity(model))
    }

    /// Deletes a bootcamp by ID.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BootcampRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Finds bootcamps within `distance` miles of the zipcode's location.
    ///
    /// The zipcode is resolved through the geocoder; the linear distance is
    /// converted into an angular radius by dividing by Earth's radius, and the
    /// repository selects the rows whose stored coordinates fall within that
    /// spherical cap.
    pub async fn find_in_radius(
        &self,
        zipcode: &str,
        distance_miles: f64,
    ) -> Result<Vec<Bootcamp>, AppError> {
        let center = self.resolve_location(zipcode).await?;

        let angular_radius = distance_miles / EARTH_RADIUS_MILES;

        let repo = BootcampRepository::new(self.db);

        let models = repo
            .find_within_radius(center.lat, center.lng, angular_radius)
            .await?;

        Ok(models.into_iter().map(Bootcamp::from_entity).collect())
    }

    /// Geocode step of the write pipeline: resolves a free-text location to
    /// the first candidate the geocoder returns.
    async fn resolve_location(&self, address: &str) -> Result<Location, AppError> {
        let results = self.geocoder.geocode(address).await?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoResults(address.to_string()))?;

        Ok(location_from(first))
    }
}

fn location_from(result: GeocodeResult) -> Location {
    Location {
        lat: result.latitude,
        lng: result.longitude,
        formatted_address: result.formatted_address,
        street: result.street,
        city: result.city,
        state: result.state,
        zipcode: result.zipcode,
        country: result.country,
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Bootcamp with id {} not found", id))
}

/// Maps a unique-index violation on the name column to the validation error
/// the API reports; any other database error passes through.
fn duplicate_name_or(err: sea_orm::DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationError::DuplicateName(name.to_string()).into()
        }
        _ => err.into(),
    }
}
