use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::property::PropertyFactory;

/// Tests replacing a property's fields.
///
/// Verifies that every field is replaced and the update timestamp moves forward
/// while the creation timestamp is kept.
///
/// Expected: Ok with the updated property
#[tokio::test]
async fn updates_property_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::days(3);
    let property = PropertyFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let updated = repo
        .update(UpdatePropertyParam {
            id: property.id,
            fields: PropertyFields {
                category: "house".to_string(),
                price: 1800.0,
                status: "booked".to_string(),
                ..fields("Renamed")
            },
        })
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category, "house");
    assert_eq!(updated.price, 1800.0);
    assert_eq!(updated.status, "booked");
    assert_eq!(updated.created_at, property.created_at);
    assert!(updated.updated_at > property.updated_at);

    Ok(())
}

/// Tests updating a property that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PropertyRepository::new(db);
    let result = repo
        .update(UpdatePropertyParam {
            id: 999,
            fields: fields("Ghost"),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
