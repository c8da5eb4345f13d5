//! Bootcamp data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    model::bootcamp::{BootcampChanges, NewBootcamp},
    util::geo::central_angle,
};

/// Repository providing database operations for bootcamps.
pub struct BootcampRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BootcampRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an enriched bootcamp record.
    ///
    /// The record arrives with its slug and location already derived; the
    /// repository only supplies the creation timestamp. A duplicate name
    /// fails on the unique index.
    pub async fn insert(&self, record: NewBootcamp) -> Result<entity::bootcamp::Model, DbErr> {
        let careers = record.careers_column();

        entity::bootcamp::ActiveModel {
            name: ActiveValue::Set(record.name),
            slug: ActiveValue::Set(record.slug),
            description: ActiveValue::Set(record.description),
            website_work: ActiveValue::Set(record.website.work),
            website_profile: ActiveValue::Set(record.website.profile),
            email: ActiveValue::Set(record.email),
            phone: ActiveValue::Set(record.phone),
            careers: ActiveValue::Set(careers),
            average_rating: ActiveValue::Set(record.average_rating),
            average_cost: ActiveValue::Set(record.average_cost),
            photo: ActiveValue::Set(record.photo),
            housing: ActiveValue::Set(record.housing),
            job_assistance: ActiveValue::Set(record.job_assistance),
            job_guarantee: ActiveValue::Set(record.job_guarantee),
            accept_gi: ActiveValue::Set(record.accept_gi),
            location_lat: ActiveValue::Set(record.location.lat),
            location_lng: ActiveValue::Set(record.location.lng),
            formatted_address: ActiveValue::Set(record.location.formatted_address),
            street: ActiveValue::Set(record.location.street),
            city: ActiveValue::Set(record.location.city),
            state: ActiveValue::Set(record.location.state),
            zipcode: ActiveValue::Set(record.location.zipcode),
            country: ActiveValue::Set(record.location.country),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all bootcamps ordered by creation time.
    pub async fn get_all(&self) -> Result<Vec<entity::bootcamp::Model>, DbErr> {
        entity::prelude::Bootcamp::find()
            .order_by_asc(entity::bootcamp::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a bootcamp by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::bootcamp::Model>, DbErr> {
        entity::prelude::Bootcamp::find_by_id(id).one(self.db).await
    }

    /// Applies column changes to an existing bootcamp row.
    ///
    /// Only the fields carried by `changes` are written; everything else is
    /// left as stored.
    pub async fn update(
        &self,
        existing: entity::bootcamp::Model,
        changes: BootcampChanges,
    ) -> Result<entity::bootcamp::Model, DbErr> {
        let mut active: entity::bootcamp::ActiveModel = existing.into();

        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = changes.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(careers) = changes.careers {
            active.careers = ActiveValue::Set(entity::bootcamp::CareerList(careers));
        }
        if let Some(website) = changes.website {
            active.website_work = ActiveValue::Set(website.work);
            active.website_profile = ActiveValue::Set(website.profile);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = changes.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(average_rating) = changes.average_rating {
            active.average_rating = ActiveValue::Set(Some(average_rating));
        }
        if let Some(average_cost) = changes.average_cost {
            active.average_cost = ActiveValue::Set(Some(average_cost));
        }
        if let Some(photo) = changes.photo {
            active.photo = ActiveValue::Set(photo);
        }
        if let Some(housing) = changes.housing {
            active.housing = ActiveValue::Set(housing);
        }
        if let Some(job_assistance) = changes.job_assistance {
            active.job_assistance = ActiveValue::Set(job_assistance);
        }
        if let Some(job_guarantee) = changes.job_guarantee {
            active.job_guarantee = ActiveValue::Set(job_guarantee);
        }
        if let Some(accept_gi) = changes.accept_gi {
            active.accept_gi = ActiveValue::Set(accept_gi);
        }
        if let Some(location) = changes.location {
            active.location_lat = ActiveValue::Set(location.lat);
            active.location_lng = ActiveValue::Set(location.lng);
            active.formatted_address = ActiveValue::Set(location.formatted_address);
            active.street = ActiveValue::Set(location.street);
            active.city = ActiveValue::Set(location.city);
            active.state = ActiveValue::Set(location.state);
            active.zipcode = ActiveValue::Set(location.zipcode);
            active.country = ActiveValue::Set(location.country);
        }

        active.update(self.db).await
    }

    /// Deletes a bootcamp by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No bootcamp with this ID existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bootcamp::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every bootcamp row. Used by the seeder.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Bootcamp::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds bootcamps within the spherical cap centered at `(lat, lng)`.
    ///
    /// `angular_radius` is in radians (linear distance divided by Earth's
    /// radius). SQLite has no spherical index, so the containment predicate
    /// is evaluated here over the stored coordinates; the table is small
    /// enough that a scan is fine.
    pub async fn find_within_radius(
        &self,
        lat: f64,
        lng: f64,
        angular_radius: f64,
    ) -> Result<Vec<entity::bootcamp::Model>, DbErr> {
        let all = self.get_all().await?;

        Ok(all
            .into_iter()
            .filter(|model| {
                central_angle(lat, lng, model.location_lat, model.location_lng) <= angular_radius
            })
            .collect())
    }
}
