use super::*;

/// Tests the enrichment pipeline on create.
///
/// Verifies that the slug is derived from the name, the address is resolved
/// through the geocoder into stored location fields, and the submitted
/// address text itself is consumed rather than persisted.
///
/// Expected: Ok with slug and location populated
#[tokio::test]
async fn derives_slug_and_geocodes_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let service = BootcampService::new(db, &geocoder);
    let created = service.create(create_params("Devworks Bootcamp")).await?;

    assert_eq!(created.name, "Devworks Bootcamp");
    assert_eq!(created.slug, "devworks-bootcamp");
    assert_eq!(created.location.lat, 42.3601);
    assert_eq!(created.location.lng, -71.0589);
    assert_eq!(created.location.city.as_deref(), Some("Boston"));
    assert_eq!(
        created.location.formatted_address.as_deref(),
        Some("233 Bay State Rd, Boston, MA, 02215, US")
    );
    assert_eq!(
        geocoder.queries(),
        vec!["233 Bay State Rd Boston MA 02215".to_string()]
    );

    Ok(())
}

/// Tests that a duplicate name is reported as a validation error.
///
/// Expected: Err(DuplicateName) with no second row written
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    BootcampFactory::new(db).name("Devworks Bootcamp").build().await?;

    let service = BootcampService::new(db, &geocoder);
    let result = service.create(create_params("Devworks Bootcamp")).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateName(_)))
    ));

    let count = entity::prelude::Bootcamp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a geocoding failure aborts the create.
///
/// Expected: Err(GeocodeErr) with nothing written
#[tokio::test]
async fn aborts_when_geocoding_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::failing();

    let service = BootcampService::new(db, &geocoder);
    let result = service.create(create_params("Devworks Bootcamp")).await;

    assert!(matches!(
        result,
        Err(AppError::GeocodeErr(GeocodeError::NoResults(_)))
    ));

    let count = entity::prelude::Bootcamp::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that the default photo carries through to the stored bootcamp.
///
/// Expected: Ok with photo "no-photo.jpg"
#[tokio::test]
async fn keeps_default_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let service = BootcampService::new(db, &geocoder);
    let created = service.create(create_params("Devworks Bootcamp")).await?;

    assert_eq!(created.photo, "no-photo.jpg");

    Ok(())
}
