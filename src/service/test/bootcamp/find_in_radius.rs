use super::*;
use crate::service::geocoder::GeocodeResult;

/// Stub resolving every query to the equator origin, which keeps the
/// distance arithmetic below easy to check: one degree of latitude is
/// roughly 69.17 miles.
fn equator_geocoder() -> StubGeocoder {
    StubGeocoder::returning(GeocodeResult {
        latitude: 0.0,
        longitude: 0.0,
        formatted_address: None,
        street: None,
        city: None,
        state: None,
        zipcode: None,
        country: None,
    })
}

/// Tests that only bootcamps inside the requested distance are returned.
///
/// Expected: Ok with the nearby bootcamp only
#[tokio::test]
async fn returns_only_bootcamps_within_distance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = equator_geocoder();

    let near = BootcampFactory::new(db).coordinates(0.5, 0.0).build().await?;
    BootcampFactory::new(db).coordinates(5.0, 0.0).build().await?;

    let service = BootcampService::new(db, &geocoder);
    let found = service.find_in_radius("02110", 50.0).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, near.id);
    assert_eq!(geocoder.queries(), vec!["02110".to_string()]);

    Ok(())
}

/// Tests the distance boundary around one degree of latitude.
///
/// A bootcamp one degree north of the center is ~69.17 miles out, so a
/// 70-mile search finds it and a 69-mile search does not.
///
/// Expected: Ok, included at 70 miles and excluded at 69
#[tokio::test]
async fn respects_distance_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = equator_geocoder();

    BootcampFactory::new(db).coordinates(1.0, 0.0).build().await?;

    let service = BootcampService::new(db, &geocoder);

    let wide = service.find_in_radius("02110", 70.0).await?;
    assert_eq!(wide.len(), 1);

    let narrow = service.find_in_radius("02110", 69.0).await?;
    assert!(narrow.is_empty());

    Ok(())
}

/// Tests a search around an empty table.
///
/// Expected: Ok with no bootcamps
#[tokio::test]
async fn returns_empty_when_no_bootcamps() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = equator_geocoder();

    let service = BootcampService::new(db, &geocoder);
    let found = service.find_in_radius("02110", 100.0).await?;

    assert!(found.is_empty());

    Ok(())
}

/// Tests that a failed zipcode lookup propagates.
///
/// Expected: Err(GeocodeErr) without touching the table
#[tokio::test]
async fn propagates_zipcode_lookup_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::failing();

    BootcampFactory::new(db).build().await?;

    let service = BootcampService::new(db, &geocoder);
    let result = service.find_in_radius("00000", 10.0).await;

    assert!(matches!(
        result,
        Err(AppError::GeocodeErr(GeocodeError::NoResults(_)))
    ));

    Ok(())
}
