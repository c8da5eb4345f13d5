//! One-shot fixture import and delete, used by the `seed` binary.
//!
//! Imported records flow through the same validate/enrich pipeline as API
//! creates, so seeded rows get real slugs and geocoded locations and an
//! invalid fixture record aborts the import.

use sea_orm::DatabaseConnection;

use crate::{
    data::bootcamp::BootcampRepository,
    error::AppError,
    model::bootcamp::{CreateBootcampDto, CreateBootcampParams},
    service::{bootcamp::BootcampService, geocoder::Geocoder},
};

/// Imports every record from the fixture file.
///
/// # Arguments
/// - `db` - Database connection
/// - `geocoder` - Geocoding collaborator for the enrichment pipeline
/// - `path` - Path to a JSON array of create-shaped bootcamp documents
///
/// # Returns
/// - `Ok(usize)` - Number of bootcamps imported
/// - `Err(AppError)` - File, parse, validation, geocoding, or database failure
pub async fn import(
    db: &DatabaseConnection,
    geocoder: &dyn Geocoder,
    path: &str,
) -> Result<usize, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<CreateBootcampDto> = serde_json::from_str(&raw)?;

    let service = BootcampService::new(db, geocoder);

    let mut imported = 0;
    for record in records {
        let params = CreateBootcampParams::from_dto(record)?;
        service.create(params).await?;
        imported += 1;
    }

    Ok(imported)
}

/// Deletes every bootcamp row.
///
/// # Returns
/// - `Ok(u64)` - Number of rows deleted
pub async fn destroy(db: &DatabaseConnection) -> Result<u64, AppError> {
    let repo = BootcampRepository::new(db);

    repo.delete_all().await.map_err(Into::into)
}
