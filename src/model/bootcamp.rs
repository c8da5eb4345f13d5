//! Bootcamp domain models, DTOs, and operation parameter types.
//!
//! DTOs carry the public camelCase JSON shape. Parameter types are the
//! validated form handed to the service layer; `from_dto` is the validation
//! step of the write pipeline and is the only way to obtain one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::bootcamp::{Career, CareerList};

use crate::{
    error::validation::ValidationError,
    model::api::EmptyDto,
    util::validate::{is_valid_email, is_valid_phone, is_valid_url},
};

/// Maximum length of a bootcamp name.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a bootcamp description.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Placeholder photo filename applied when none is submitted.
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

/// Geocoded location of a bootcamp, derived from the submitted address.
///
/// Never client-writable; produced by the geocode step of the write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

/// Website links of a bootcamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Website {
    pub work: Option<String>,
    pub profile: Option<String>,
}

impl Website {
    fn is_empty(&self) -> bool {
        self.work.is_none() && self.profile.is_none()
    }
}

/// Bootcamp domain model.
#[derive(Debug, Clone)]
pub struct Bootcamp {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Website,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub careers: Vec<Career>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

impl Bootcamp {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::bootcamp::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            website: Website {
                work: entity.website_work,
                profile: entity.website_profile,
            },
            email: entity.email,
            phone: entity.phone,
            careers: entity.careers.0,
            average_rating: entity.average_rating,
            average_cost: entity.average_cost,
            photo: entity.photo,
            housing: entity.housing,
            job_assistance: entity.job_assistance,
            job_guarantee: entity.job_guarantee,
            accept_gi: entity.accept_gi,
            location: Location {
                lat: entity.location_lat,
                lng: entity.location_lng,
                formatted_address: entity.formatted_address,
                street: entity.street,
                city: entity.city,
                state: entity.state,
                zipcode: entity.zipcode,
                country: entity.country,
            },
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> BootcampDto {
        BootcampDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            website: if self.website.is_empty() {
                None
            } else {
                Some(WebsiteDto {
                    work: self.website.work,
                    profile: self.website.profile,
                })
            },
            email: self.email,
            phone: self.phone,
            careers: self.careers,
            average_rating: self.average_rating,
            average_cost: self.average_cost,
            photo: self.photo,
            housing: self.housing,
            job_assistance: self.job_assistance,
            job_guarantee: self.job_guarantee,
            accept_gi: self.accept_gi,
            location: LocationDto::from_location(self.location),
            created_at: self.created_at,
        }
    }
}

/// Website links in the public API shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebsiteDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// GeoJSON-style location in the public API shape.
///
/// `type` is always the canonical `"Point"` and `coordinates` is
/// `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(rename = "type")]
    #[schema(example = "Point")]
    pub kind: String,
    pub coordinates: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl LocationDto {
    fn from_location(location: Location) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [location.lng, location.lat],
            formatted_address: location.formatted_address,
            street: location.street,
            city: location.city,
            state: location.state,
            zipcode: location.zipcode,
            country: location.country,
        }
    }
}

/// Bootcamp in the public API shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BootcampDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub careers: Vec<Career>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub location: LocationDto,
    pub created_at: DateTime<Utc>,
}

/// Single-bootcamp success response, `{"success": true, "data": {...}}`.
#[derive(Serialize, ToSchema)]
pub struct BootcampItemDto {
    pub success: bool,
    pub data: BootcampDto,
}

impl BootcampItemDto {
    pub fn new(bootcamp: Bootcamp) -> Self {
        Self {
            success: true,
            data: bootcamp.into_dto(),
        }
    }
}

/// Bootcamp collection success response with a count.
#[derive(Serialize, ToSchema)]
pub struct BootcampListDto {
    pub success: bool,
    pub count: usize,
    pub data: Vec<BootcampDto>,
}

impl BootcampListDto {
    pub fn new(bootcamps: Vec<Bootcamp>) -> Self {
        Self {
            success: true,
            count: bootcamps.len(),
            data: bootcamps.into_iter().map(Bootcamp::into_dto).collect(),
        }
    }
}

/// Delete success response with an empty data payload.
#[derive(Serialize, ToSchema)]
pub struct DeletedDto {
    pub success: bool,
    pub data: EmptyDto,
}

impl DeletedDto {
    pub fn new() -> Self {
        Self {
            success: true,
            data: EmptyDto {},
        }
    }
}

/// Create request body.
///
/// Required fields are optional at the serde level so their absence surfaces
/// as a `ValidationError` with the API's wording rather than a deserializer
/// rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootcampDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub careers: Vec<Career>,
    #[serde(default)]
    pub website: Option<WebsiteDto>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub average_cost: Option<f64>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub housing: bool,
    #[serde(default)]
    pub job_assistance: bool,
    #[serde(default)]
    pub job_guarantee: bool,
    #[serde(default)]
    pub accept_gi: bool,
}

/// Update request body. Only supplied fields change.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootcampDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub careers: Option<Vec<Career>>,
    #[serde(default)]
    pub website: Option<WebsiteDto>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub average_cost: Option<f64>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub housing: Option<bool>,
    #[serde(default)]
    pub job_assistance: Option<bool>,
    #[serde(default)]
    pub job_guarantee: Option<bool>,
    #[serde(default)]
    pub accept_gi: Option<bool>,
}

/// Validated create parameters, ready for the enrichment pipeline.
#[derive(Debug, Clone)]
pub struct CreateBootcampParams {
    pub name: String,
    pub description: String,
    pub address: String,
    pub careers: Vec<Career>,
    pub website: Website,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

impl CreateBootcampParams {
    /// Validates a create request body and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(CreateBootcampParams)` - All fields present and well-formed
    /// - `Err(ValidationError)` - First failing check, mapped to 400
    pub fn from_dto(dto: CreateBootcampDto) -> Result<Self, ValidationError> {
        let name = required_trimmed(dto.name, "name")?;
        check_len(&name, "Name", NAME_MAX_LEN)?;

        let description = required_trimmed(dto.description, "description")?;
        check_len(&description, "Description", DESCRIPTION_MAX_LEN)?;

        let address = required_trimmed(dto.address, "address")?;

        if dto.careers.is_empty() {
            return Err(ValidationError::EmptyCareers);
        }

        let website = check_website(dto.website)?;
        let email = check_email(dto.email)?;
        let phone = check_phone(dto.phone)?;
        let average_rating = check_rating(dto.average_rating)?;

        Ok(Self {
            name,
            description,
            address,
            careers: dto.careers,
            website,
            email,
            phone,
            average_rating,
            average_cost: dto.average_cost,
            photo: dto.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        })
    }
}

/// Validated update parameters. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBootcampParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<Career>>,
    pub website: Option<Website>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: Option<String>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl UpdateBootcampParams {
    /// Validates an update request body and converts it to parameters.
    ///
    /// Updates enforce the same checks as creates for every supplied field.
    pub fn from_dto(dto: UpdateBootcampDto) -> Result<Self, ValidationError> {
        let name = match dto.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ValidationError::MissingField("name"));
                }
                check_len(&name, "Name", NAME_MAX_LEN)?;
                Some(name)
            }
            None => None,
        };

        let description = match dto.description {
            Some(description) => {
                let description = description.trim().to_string();
                if description.is_empty() {
                    return Err(ValidationError::MissingField("description"));
                }
                check_len(&description, "Description", DESCRIPTION_MAX_LEN)?;
                Some(description)
            }
            None => None,
        };

        if let Some(careers) = &dto.careers {
            if careers.is_empty() {
                return Err(ValidationError::EmptyCareers);
            }
        }

        let website = match dto.website {
            Some(website) => Some(check_website(Some(website))?),
            None => None,
        };
        let email = check_email(dto.email)?;
        let phone = check_phone(dto.phone)?;
        let average_rating = check_rating(dto.average_rating)?;

        Ok(Self {
            name,
            description,
            address: dto.address,
            careers: dto.careers,
            website,
            email,
            phone,
            average_rating,
            average_cost: dto.average_cost,
            photo: dto.photo,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        })
    }
}

/// Enriched record ready for insertion: slug derived, address geocoded away.
#[derive(Debug, Clone)]
pub struct NewBootcamp {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub careers: Vec<Career>,
    pub website: Website,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub location: Location,
}

impl NewBootcamp {
    pub(crate) fn careers_column(&self) -> CareerList {
        CareerList(self.careers.clone())
    }
}

/// Column changes applied by an update: validated fields plus any re-derived
/// slug and re-geocoded location.
#[derive(Debug, Clone, Default)]
pub struct BootcampChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub careers: Option<Vec<Career>>,
    pub website: Option<Website>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: Option<String>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
    pub location: Option<Location>,
}

fn required_trimmed(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(value)
}

fn check_len(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

fn check_email(email: Option<String>) -> Result<Option<String>, ValidationError> {
    match email {
        Some(email) if !is_valid_email(&email) => Err(ValidationError::InvalidEmail(email)),
        other => Ok(other),
    }
}

fn check_phone(phone: Option<String>) -> Result<Option<String>, ValidationError> {
    match phone {
        Some(phone) if !is_valid_phone(&phone) => Err(ValidationError::InvalidPhone(phone)),
        other => Ok(other),
    }
}

fn check_rating(rating: Option<f64>) -> Result<Option<f64>, ValidationError> {
    match rating {
        Some(rating) if !(1.0..=10.0).contains(&rating) => {
            Err(ValidationError::RatingOutOfRange(rating))
        }
        other => Ok(other),
    }
}

fn check_website(website: Option<WebsiteDto>) -> Result<Website, ValidationError> {
    let Some(website) = website else {
        return Ok(Website::default());
    };

    for url in [&website.work, &website.profile].into_iter().flatten() {
        if !is_valid_url(url) {
            return Err(ValidationError::InvalidUrl(url.clone()));
        }
    }

    Ok(Website {
        work: website.work,
        profile: website.profile,
    })
}
