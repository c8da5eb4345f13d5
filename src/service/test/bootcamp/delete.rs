use super::*;

/// Tests deleting an existing bootcamp through the service.
///
/// Expected: Ok(()) and a later fetch reports NotFound
#[tokio::test]
async fn deletes_existing_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::boston();

    let created = BootcampFactory::new(db).build().await?;

    let service = BootcampService::new(db, &geocoder);
    service.delete(created.id).await?;

    let result = service.get_by_id(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting an unknown ID.
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
    let result = service.delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
