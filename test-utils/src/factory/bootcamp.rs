//! Bootcamp factory for creating test bootcamp entities.
//!
//! Provides factory methods for inserting bootcamp entities with sensible
//! defaults, reducing boilerplate in tests. Defaults are sourced from the
//! bootcamp fixture; each factory instance gets a unique name so multiple
//! bootcamps can be created without tripping the unique-name index.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::bootcamp::{self, Career, CareerList};

/// Factory for creating test bootcamps with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bootcamp::BootcampFactory;
///
/// let bootcamp = BootcampFactory::new(&db)
///     .name("Devworks")
///     .coordinates(40.71, -73.99)
///     .build()
///     .await?;
/// ```
pub struct BootcampFactory<'a> {
    db: &'a DatabaseConnection,
    entity: bootcamp::Model,
}

impl<'a> BootcampFactory<'a> {
    /// Creates a new factory with default values from the fixture.
    ///
    /// The name and slug are derived from a unique counter value so repeated
    /// factory calls never collide on the unique name index.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::bootcamp::entity_builder()
            .name(format!("Bootcamp {}", id))
            .slug(format!("bootcamp-{}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the bootcamp name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the bootcamp slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Sets the stored coordinates.
    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.entity.location_lat = lat;
        self.entity.location_lng = lng;
        self
    }

    /// Sets the career list.
    pub fn careers(mut self, careers: Vec<Career>) -> Self {
        self.entity.careers = CareerList(careers);
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: Option<String>) -> Self {
        self.entity.city = city;
        self
    }

    /// Inserts the bootcamp into the database.
    ///
    /// The primary key is left to the database so callers can rely on
    /// auto-incremented IDs.
    ///
    /// # Returns
    /// - `Ok(bootcamp::Model)` - The inserted bootcamp row
    /// - `Err(DbErr)` - Insert failed (e.g. duplicate name)
    pub async fn build(self) -> Result<bootcamp::Model, DbErr> {
        bootcamp::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            slug: ActiveValue::Set(self.entity.slug),
            description: ActiveValue::Set(self.entity.description),
            website_work: ActiveValue::Set(self.entity.website_work),
            website_profile: ActiveValue::Set(self.entity.website_profile),
            email: ActiveValue::Set(self.entity.email),
            phone: ActiveValue::Set(self.entity.phone),
            careers: ActiveValue::Set(self.entity.careers),
            average_rating: ActiveValue::Set(self.entity.average_rating),
            average_cost: ActiveValue::Set(self.entity.average_cost),
            photo: ActiveValue::Set(self.entity.photo),
            housing: ActiveValue::Set(self.entity.housing),
            job_assistance: ActiveValue::Set(self.entity.job_assistance),
            job_guarantee: ActiveValue::Set(self.entity.job_guarantee),
            accept_gi: ActiveValue::Set(self.entity.accept_gi),
            location_lat: ActiveValue::Set(self.entity.location_lat),
            location_lng: ActiveValue::Set(self.entity.location_lng),
            formatted_address: ActiveValue::Set(self.entity.formatted_address),
            street: ActiveValue::Set(self.entity.street),
            city: ActiveValue::Set(self.entity.city),
            state: ActiveValue::Set(self.entity.state),
            zipcode: ActiveValue::Set(self.entity.zipcode),
            country: ActiveValue::Set(self.entity.country),
            created_at: ActiveValue::Set(self.entity.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
