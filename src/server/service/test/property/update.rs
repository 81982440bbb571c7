use super::*;

fn param(id: i32) -> UpdatePropertyParam {
    UpdatePropertyParam {
        id,
        fields: PropertyFields {
            title: "Refurbished loft".to_string(),
            description: None,
            address: "4 Mill Yard".to_string(),
            category: "flat".to_string(),
            price: 1750.0,
            bedrooms: 2,
            bathrooms: 2,
            status: "booked".to_string(),
        },
    }
}

/// Tests updating a property that has images.
///
/// Expected: Ok with the new fields and the existing images
#[tokio::test]
async fn updates_and_keeps_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    factory::create_property_image(db, property.id).await?;

    let updated = PropertyService::new(db).update(param(property.id)).await?;

    assert_eq!(updated.title, "Refurbished loft");
    assert_eq!(updated.status, "booked");
    assert_eq!(updated.images.len(), 1);

    Ok(())
}

/// Tests updating a missing property.
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

    let result = PropertyService::new(db).update(param(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
