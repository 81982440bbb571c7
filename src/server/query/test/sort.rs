use super::*;
use crate::server::query::predicate::{SortDirection, SortKey};
use chrono::{Duration, Utc};

/// Tests that results default to newest first.
///
/// Expected: descending creation time
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = PropertyFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = PropertyFactory::new(db).created_at(now).build().await?;
    let middle = PropertyFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let collection = EntityCollection::<Property>::new(db);
    let params = QueryParams::default();
    let documents = QueryBuilder::new(&collection, &params)
        .sort()
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        ids(&documents),
        vec![newest.id as i64, middle.id as i64, oldest.id as i64]
    );

    Ok(())
}

/// Tests ordering by several keys with mixed directions.
///
/// Expected: category ascending, then price descending within a category
#[tokio::test]
async fn orders_by_multiple_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = seed(
        db,
        &[
            ("house", 1200.0),
            ("flat", 800.0),
            ("house", 2500.0),
            ("flat", 950.0),
        ],
    )
    .await?;

    let collection = EntityCollection::<Property>::new(db);
    let params = params(json!({ "sort": "category,-price" }));
    let documents = QueryBuilder::new(&collection, &params)
        .sort()
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        ids(&documents),
        vec![
            created[3] as i64,
            created[1] as i64,
            created[2] as i64,
            created[0] as i64
        ]
    );

    Ok(())
}

/// Tests that equal sort values fall back to ID order.
///
/// Expected: ascending IDs for identical prices
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = seed(db, &[("flat", 700.0), ("flat", 700.0), ("flat", 700.0)]).await?;

    let collection = EntityCollection::<Property>::new(db);
    let params = params(json!({ "sort": "-price" }));
    let documents = QueryBuilder::new(&collection, &params)
        .sort()
        .fetch()
        .await
        .unwrap();

    let expected: Vec<i64> = created.iter().map(|id| *id as i64).collect();
    assert_eq!(ids(&documents), expected);

    Ok(())
}

/// Tests that a later sort stage replaces an earlier one.
///
/// Expected: a single descending price key
#[tokio::test]
async fn replaces_previous_sort() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = EntityCollection::<Property>::new(db);
    let params = params(json!({ "sort": "-price" }));
    let builder = QueryBuilder::new(&collection, &params).sort().sort();

    assert_eq!(
        builder.spec().sort,
        vec![SortKey {
            field: "price".to_string(),
            direction: SortDirection::Descending,
        }]
    );

    Ok(())
}

/// Tests that a sort naming only unknown fields falls back to newest first.
///
/// Expected: descending creation time
#[tokio::test]
async fn falls_back_to_default_for_unknown_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = PropertyFactory::new(db)
        .price(100.0)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = PropertyFactory::new(db)
        .price(300.0)
        .created_at(now)
        .build()
        .await?;

    let collection = EntityCollection::<Property>::new(db);
    let params = params(json!({ "sort": "-popularity" }));
    let documents = QueryBuilder::new(&collection, &params)
        .sort()
        .fetch()
        .await
        .unwrap();

    assert_eq!(ids(&documents), vec![newer.id as i64, older.id as i64]);

    Ok(())
}

/// Tests that unknown fields are skipped when another sort field is known.
///
/// Expected: ascending price
#[tokio::test]
async fn skips_unknown_fields_beside_known_ones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let pricey = PropertyFactory::new(db)
        .price(900.0)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let cheap = PropertyFactory::new(db)
        .price(200.0)
        .created_at(now)
        .build()
        .await?;

    let collection = EntityCollection::<Property>::new(db);
    let params = params(json!({ "sort": "-popularity,price" }));
    let documents = QueryBuilder::new(&collection, &params)
        .sort()
        .fetch()
        .await
        .unwrap();

    assert_eq!(ids(&documents), vec![cheap.id as i64, pricey.id as i64]);

    Ok(())
}
