use super::*;
use test_utils::factory::property_image::PropertyImageFactory;

/// Tests that deleting a property removes its rows and stored files.
///
/// Expected: Ok, no rows left, and the image file gone
#[tokio::test]
async fn deletes_property_and_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("front.jpg");
    std::fs::write(&file, b"jpg").unwrap();

    let property = factory::create_property(db).await?;
    PropertyImageFactory::new(db, property.id)
        .path(file.to_string_lossy())
        .build()
        .await?;

    PropertyService::new(db).delete(property.id).await?;

    assert_eq!(Property::find().count(db).await?, 0);
    assert_eq!(PropertyImage::find().count(db).await?, 0);
    assert!(!file.exists());

    Ok(())
}

/// Tests that a missing image file does not fail the deletion.
///
/// Expected: Ok and the property removed
#[tokio::test]
async fn tolerates_missing_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    PropertyImageFactory::new(db, property.id)
        .path("uploads/image/does-not-exist.jpg")
        .build()
        .await?;

    PropertyService::new(db).delete(property.id).await?;

    assert_eq!(Property::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing property.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
