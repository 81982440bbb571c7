use super::*;
use crate::server::query::QueryParams;

/// Tests listing with search, category, price, sort, and projection together.
///
/// Expected: matching properties by descending price, projected to the listed fields
#[tokio::test]
async fn lists_matching_properties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap = PropertyFactory::new(db)
        .title("Lakeside flat")
        .price(800.0)
        .build()
        .await?;
    let pricey = PropertyFactory::new(db)
        .description(Some("Quiet street near the lake".to_string()))
        .price(1400.0)
        .build()
        .await?;
    PropertyFactory::new(db)
        .title("Lakeside house")
        .category("house")
        .price(1200.0)
        .build()
        .await?;
    PropertyFactory::new(db)
        .title("Lake view flat")
        .price(3000.0)
        .build()
        .await?;

    let params: QueryParams = serde_json::from_value(json!({
        "searchTerm": "lake",
        "category": "flat",
        "price": "500-2000",
        "sort": "-price",
        "fields": "title,price",
    }))
    .unwrap();

    let page = PropertyService::new(db).get_paginated(&params).await?;

    assert_eq!(page.meta.total, 2);
    assert_eq!(page.meta.total_page, 1);
    assert_eq!(
        page.result,
        vec![
            json!({ "id": pricey.id, "title": pricey.title, "price": 1400.0 }),
            json!({ "id": cheap.id, "title": "Lakeside flat", "price": 800.0 }),
        ]
    );

    Ok(())
}

/// Tests listing without parameters.
///
/// Expected: newest first, first page of ten
#[tokio::test]
async fn applies_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..11 {
        factory::create_property(db).await?;
    }

    let page = PropertyService::new(db)
        .get_paginated(&QueryParams::default())
        .await?;

    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.limit, 10);
    assert_eq!(page.meta.total, 11);
    assert_eq!(page.meta.total_page, 2);
    assert_eq!(page.result.len(), 10);

    Ok(())
}
