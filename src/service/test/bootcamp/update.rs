use super::*;

/// Tests that a supplied name re-derives the slug.
///
/// No address was supplied, so the geocoder must not be consulted and the
/// stored location must survive unchanged.
///
/// Expected: Ok with new slug, old location, zero geocoder queries
#[tokio::test]
async fn supplied_name_rederives_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let created = BootcampFactory::new(db)
        .name("Devworks")
        .slug("devworks")
        .coordinates(40.7128, -74.0060)
        .build()
        .await?;

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        name: Some("Devworks Bootcamp".to_string()),
        ..Default::default()
    };
    let updated = service.update(created.id, params).await?;

    assert_eq!(updated.name, "Devworks Bootcamp");
    assert_eq!(updated.slug, "devworks-bootcamp");
    assert_eq!(updated.location.lat, 40.7128);
    assert!(geocoder.queries().is_empty());

    Ok(())
}

/// Tests that a supplied address is re-geocoded.
///
/// Expected: Ok with the location replaced by the geocoder's answer
#[tokio::test]
async fn supplied_address_regeocodes_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let created = BootcampFactory::new(db)
        .coordinates(40.7128, -74.0060)
        .city(Some("New York".to_string()))
        .build()
        .await?;

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        address: Some("233 Bay State Rd Boston MA 02215".to_string()),
        ..Default::default()
    };
    let updated = service.update(created.id, params).await?;

    assert_eq!(updated.location.lat, 42.3601);
    assert_eq!(updated.location.lng, -71.0589);
    assert_eq!(updated.location.city.as_deref(), Some("Boston"));
    assert_eq!(
        geocoder.queries(),
        vec!["233 Bay State Rd Boston MA 02215".to_string()]
    );

    Ok(())
}

/// Tests that a geocoding failure aborts the update.
///
/// Expected: Err(GeocodeErr) with the stored row unchanged
#[tokio::test]
async fn aborts_when_regeocoding_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::failing();

    let created = BootcampFactory::new(db)
        .name("Devworks")
        .coordinates(40.7128, -74.0060)
        .build()
        .await?;

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        name: Some("Renamed".to_string()),
        address: Some("nowhere".to_string()),
        ..Default::default()
    };
    let result = service.update(created.id, params).await;

    assert!(matches!(
        result,
        Err(AppError::GeocodeErr(GeocodeError::NoResults(_)))
    ));

    let stored = service.get_by_id(created.id).await?;
    assert_eq!(stored.name, "Devworks");

    Ok(())
}

/// Tests that fields left out of the update survive unchanged.
///
/// Expected: Ok with only the description changed
#[tokio::test]
async fn leaves_omitted_fields_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let created = BootcampFactory::new(db)
        .name("Devworks")
        .slug("devworks")
        .careers(vec![Career::DataScience])
        .build()
        .await?;

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        description: Some("Now with data science".to_string()),
        ..Default::default()
    };
    let updated = service.update(created.id, params).await?;

    assert_eq!(updated.description, "Now with data science");
    assert_eq!(updated.name, "Devworks");
    assert_eq!(updated.slug, "devworks");
    assert_eq!(updated.careers, vec![Career::DataScience]);

    Ok(())
}

/// Tests updating an unknown ID.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = service.update(9999, params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that renaming onto an existing name is reported as a validation
/// error.
///
/// Expected: Err(DuplicateName)
#[tokio::test]
async fn rejects_rename_onto_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    BootcampFactory::new(db).name("Devworks").build().await?;
    let other = BootcampFactory::new(db).name("ModernTech").build().await?;

    let service = BootcampService::new(db, &geocoder);
    let params = UpdateBootcampParams {
        name: Some("Devworks".to_string()),
        ..Default::default()
    };
    let result = service.update(other.id, params).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateName(_)))
    ));

    Ok(())
}
