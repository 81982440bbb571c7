use super::*;

/// Tests deleting a property with images.
///
/// Verifies that the property and its image rows are removed and that the stored
/// image paths are returned for file cleanup.
///
/// Expected: Ok(Some(paths))
#[tokio::test]
async fn deletes_property_and_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    let image = factory::create_property_image(db, property.id).await?;

    let repo = PropertyRepository::new(db);
    let paths = repo.delete(property.id).await?;

    assert_eq!(paths, Some(vec![image.path]));
    assert_eq!(Property::find().count(db).await?, 0);
    assert_eq!(PropertyImage::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting one property leaves others untouched.
///
/// Expected: Ok(Some) and the other property still present
#[tokio::test]
async fn keeps_other_properties() -> Result<(), DbErr> {
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
    repo.delete(property.id).await?;

    assert!(Property::find_by_id(other.id).one(db).await?.is_some());
    assert_eq!(PropertyImage::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a property that does not exist.
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
    let result = repo.delete(999).await?;

    assert!(result.is_none());

    Ok(())
}
