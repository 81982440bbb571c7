use super::*;

/// Tests getting an existing property.
///
/// Expected: Ok with the property and its images
#[tokio::test]
async fn returns_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    factory::create_property_image(db, property.id).await?;

    let found = PropertyService::new(db).get_by_id(property.id).await?;

    assert_eq!(found.id, property.id);
    assert_eq!(found.images.len(), 1);

    Ok(())
}

/// Tests getting a missing property.
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

    let result = PropertyService::new(db).get_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
