use super::*;

/// Tests getting a property together with its images.
///
/// Expected: Ok(Some) with images in upload order
#[tokio::test]
async fn returns_property_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    let first = factory::create_property_image(db, property.id).await?;
    let second = factory::create_property_image(db, property.id).await?;

    let repo = PropertyRepository::new(db);
    let result = repo.get_by_id(property.id).await?;

    let found = result.expect("property should exist");
    assert_eq!(found.id, property.id);
    assert_eq!(found.images.len(), 2);
    assert_eq!(found.images[0].id, first.id);
    assert_eq!(found.images[1].id, second.id);

    Ok(())
}

/// Tests that images of other properties are not attached.
///
/// Expected: Ok(Some) with only the property's own images
#[tokio::test]
async fn excludes_images_of_other_properties() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    let other = factory::create_property(db).await?;
    factory::create_property_image(db, other.id).await?;

    let repo = PropertyRepository::new(db);
    let found = repo.get_by_id(property.id).await?.unwrap();

    assert!(found.images.is_empty());

    Ok(())
}

/// Tests getting a property that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
