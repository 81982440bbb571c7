use crate::server::query::{
    params::MAX_LIMIT,
    predicate::{PageWindow, Predicate, Projection},
    EntityCollection, QueryBuilder, QueryParams,
};
use entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory::property::PropertyFactory};

mod sort;

fn params(value: Value) -> QueryParams {
    serde_json::from_value(value).unwrap()
}

fn ids(documents: &[Value]) -> Vec<i64> {
    documents
        .iter()
        .map(|document| document["id"].as_i64().unwrap())
        .collect()
}

/// Inserts one property per `(category, price)` pair, returning their IDs in
/// insertion order.
async fn seed(db: &DatabaseConnection, rows: &[(&str, f64)]) -> Result<Vec<i32>, DbErr> {
    let mut created = Vec::with_capacity(rows.len());
    for (category, price) in rows {
        let property = PropertyFactory::new(db)
            .category(*category)
            .price(*price)
            .build()
            .await?;
        created.push(property.id);
    }
    Ok(created)
}
