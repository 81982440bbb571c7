use super::*;

/// Tests creating a property.
///
/// Verifies that the repository inserts a property with the provided fields and
/// identical creation and update timestamps.
///
/// Expected: Ok with the created property and no images
#[tokio::test]
async fn creates_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let property = repo
        .create(CreatePropertyParam {
            fields: fields("Harbour flat"),
        })
        .await?;

    assert_eq!(property.title, "Harbour flat");
    assert_eq!(property.category, "flat");
    assert_eq!(property.price, 950.0);
    assert_eq!(property.created_at, property.updated_at);
    assert!(property.images.is_empty());

    let count = Property::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that each created property gets its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let first = repo
        .create(CreatePropertyParam {
            fields: fields("First"),
        })
        .await?;
    let second = repo
        .create(CreatePropertyParam {
            fields: fields("Second"),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
