use crate::{
    data::bootcamp::BootcampRepository,
    model::bootcamp::{BootcampChanges, Location, NewBootcamp, Website},
};
use entity::bootcamp::Career;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::bootcamp::BootcampFactory};

mod insert;

/// Builds a minimal enriched record as the service layer would hand it over.
fn new_bootcamp(name: &str) -> NewBootcamp {
    NewBootcamp {
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: "A bootcamp used in tests".to_string(),
        careers: vec![Career::WebDevelopment],
        website: Website::default(),
        email: None,
        phone: None,
        average_rating: None,
        average_cost: None,
        photo: "no-photo.jpg".to_string(),
        housing: false,
        job_assistance: false,
        job_guarantee: false,
        accept_gi: false,
        location: boston(),
    }
}

fn boston() -> Location {
    Location {
        lat: 42.3601,
        lng: -71.0589,
        formatted_address: Some("Boston, MA, US".to_string()),
        street: None,
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        zipcode: Some("02110".to_string()),
        country: Some("US".to_string()),
    }
}
