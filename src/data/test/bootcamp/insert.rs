use super::*;
use sea_orm::SqlErr;

/// Tests inserting an enriched bootcamp record.
///
/// Verifies that the repository persists every submitted field plus the
/// derived slug and location columns, and stamps the creation time.
///
/// Expected: Ok with bootcamp inserted
#[tokio::test]
async fn inserts_enriched_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BootcampRepository::new(db);
    let inserted = repo.insert(new_bootcamp("Tech Bootcamp")).await?;

    assert_eq!(inserted.name, "Tech Bootcamp");
    assert_eq!(inserted.slug, "tech-bootcamp");
    assert_eq!(inserted.careers.0, vec![Career::WebDevelopment]);
    assert_eq!(inserted.photo, "no-photo.jpg");
    assert_eq!(inserted.location_lat, 42.3601);
    assert_eq!(inserted.location_lng, -71.0589);
    assert_eq!(inserted.city.as_deref(), Some("Boston"));

    let count = entity::prelude::Bootcamp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a duplicate name trips the unique index.
///
/// Verifies that inserting a second record with the same name fails with a
/// unique constraint violation and leaves the table unchanged.
///
/// Expected: Err(unique constraint) with one row remaining
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BootcampRepository::new(db);
    repo.insert(new_bootcamp("Tech Bootcamp")).await?;

    let result = repo.insert(new_bootcamp("Tech Bootcamp")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::Bootcamp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that distinct names coexist.
///
/// Expected: Ok with both rows present
#[tokio::test]
async fn allows_distinct_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bootcamp_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BootcampRepository::new(db);
    repo.insert(new_bootcamp("Tech Bootcamp")).await?;
    repo.insert(new_bootcamp("Devworks")).await?;

    let count = entity::prelude::Bootcamp::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
