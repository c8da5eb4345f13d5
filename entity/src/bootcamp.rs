//! Bootcamp entity model.
//!
//! A bootcamp row carries the client-supplied listing fields plus the derived
//! columns (`slug` and the location group) that are computed by the service
//! layer before every write. The submitted street address is consumed during
//! geocoding and never stored.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bootcamp")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website_work: Option<String>,
    pub website_profile: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub careers: CareerList,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub location_lat: f64,
    pub location_lng: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Career categories a bootcamp can offer.
///
/// Serialized with the exact display strings used by the public API
/// (e.g. `"Web Development"`), so unknown categories are rejected at
/// deserialization time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Career {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Other")]
    Other,
}

/// Careers column, stored as a JSON array of career display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CareerList(pub Vec<Career>);
