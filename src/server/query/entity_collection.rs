//! SeaORM backed [`Collection`] over any entity.
//!
//! Query field names are resolved against the entity's columns ignoring case
//! and underscores, so `createdAt` and `created_at` name the same column.
//! Fields that resolve to no column are ignored.
//!
//! Search folds ASCII letters only: `ÉTÉ` matches `été` in neither direction,
//! but does match itself.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{ColumnType, Expr, ExprTrait, Func, LikeExpr},
    ColumnTrait, Condition, DatabaseConnection, EntityName, EntityTrait, IdenStatic, Iterable,
    Order, PaginatorTrait, PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::server::{
    error::query::QueryError,
    query::{
        collection::Collection,
        params::DEFAULT_SORT,
        predicate::{Predicate, Projection, QuerySpec, SortDirection, SortKey},
    },
};

pub struct EntityCollection<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<'a, E> EntityCollection<'a, E>
where
    E: EntityTrait,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Resolves a query field name to a column of `E`.
    fn column(field: &str) -> Option<E::Column> {
        let wanted = normalize(field);
        let column = E::Column::iter().find(|column| normalize(column.as_str()) == wanted);

        if column.is_none() {
            tracing::debug!(
                "Ignoring unknown field '{}' for {}",
                field,
                E::default().table_name()
            );
        }

        column
    }

    /// Combines every predicate into a single AND condition.
    fn condition(predicates: &[Predicate]) -> Condition {
        predicates
            .iter()
            .filter_map(Self::predicate_condition)
            .fold(Condition::all(), |all, condition| all.add(condition))
    }

    /// Translates one predicate, or `None` when it names no known column.
    fn predicate_condition(predicate: &Predicate) -> Option<Condition> {
        match predicate {
            Predicate::Equals { field, value } => {
                let column = Self::column(field)?;
                let condition = match coerce(&column, value) {
                    Some(value) => column.eq(value),
                    None => column.is_in(std::iter::empty::<Value>()),
                };
                Some(Condition::all().add(condition))
            }
            Predicate::OneOf { field, values } => {
                let column = Self::column(field)?;
                let values: Vec<Value> = values
                    .iter()
                    .filter_map(|value| coerce(&column, value))
                    .collect();
                Some(Condition::all().add(column.is_in(values)))
            }
            Predicate::Between { field, min, max } => {
                let column = Self::column(field)?;
                Some(Condition::all().add(column.between(*min, *max)))
            }
            Predicate::ContainsAny { fields, term } => {
                // SQLite LOWER() folds ASCII only, so the term must be folded the same way
                let pattern = format!("%{}%", escape_like(&term.to_ascii_lowercase()));
                let condition = fields
                    .iter()
                    .filter_map(|field| Self::column(field))
                    .map(|column| {
                        Expr::expr(Func::lower(Expr::col(column)))
                            .like(LikeExpr::new(pattern.clone()).escape('\\'))
                    })
                    .fold(Condition::any(), |any, expr| any.add(expr));

                if condition.is_empty() {
                    None
                } else {
                    Some(condition)
                }
            }
        }
    }

    fn select(predicates: &[Predicate]) -> Select<E> {
        E::find().filter(Self::condition(predicates))
    }

    /// Applies the sort keys that name known columns, reporting whether any did.
    fn order(mut select: Select<E>, keys: &[SortKey]) -> (Select<E>, bool) {
        let mut ordered = false;

        for key in keys {
            if let Some(column) = Self::column(&key.field) {
                let order = match key.direction {
                    SortDirection::Ascending => Order::Asc,
                    SortDirection::Descending => Order::Desc,
                };
                select = select.order_by(column, order);
                ordered = true;
            }
        }

        (select, ordered)
    }

    /// Column names kept or dropped by `projection`, with the primary key
    /// always kept for inclusions.
    fn resolve_projection(projection: &Projection) -> ResolvedProjection {
        match projection {
            Projection::All => ResolvedProjection::All,
            Projection::Include(fields) => {
                let mut keep: Vec<&'static str> = fields
                    .iter()
                    .filter_map(|field| Self::column(field))
                    .map(|column| column.as_str())
                    .collect();

                if keep.is_empty() {
                    return ResolvedProjection::All;
                }

                for key in E::PrimaryKey::iter() {
                    let name = key.into_column().as_str();
                    if !keep.contains(&name) {
                        keep.push(name);
                    }
                }

                ResolvedProjection::Keep(keep)
            }
            Projection::Exclude(fields) => ResolvedProjection::Drop(
                fields
                    .iter()
                    .filter_map(|field| Self::column(field))
                    .map(|column| column.as_str())
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl<'a, E> Collection for EntityCollection<'a, E>
where
    E: EntityTrait,
    E::Model: Serialize + Send + Sync,
{
    type Document = JsonValue;

    async fn count(&self, predicates: &[Predicate]) -> Result<u64, QueryError> {
        Self::select(predicates)
            .count(self.db)
            .await
            .map_err(QueryError::execution)
    }

    async fn fetch(&self, spec: &QuerySpec) -> Result<Vec<JsonValue>, QueryError> {
        let select = Self::select(&spec.predicates);

        let (mut select, ordered) = Self::order(select, &spec.sort);
        if !ordered && !spec.sort.is_empty() {
            let default_keys: Vec<SortKey> =
                DEFAULT_SORT.split(',').filter_map(SortKey::parse).collect();
            select = Self::order(select, &default_keys).0;
        }

        // Primary key breaks ties between equal sort values
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }

        if let Some(window) = spec.window {
            select = select.offset(window.skip()).limit(window.limit);
        }

        let models = select.all(self.db).await.map_err(QueryError::execution)?;
        let projection = Self::resolve_projection(&spec.projection);

        models
            .into_iter()
            .map(|model| {
                let document = serde_json::to_value(model).map_err(QueryError::execution)?;
                Ok(projection.apply(document))
            })
            .collect()
    }
}

enum ResolvedProjection {
    All,
    Keep(Vec<&'static str>),
    Drop(Vec<&'static str>),
}

impl ResolvedProjection {
    fn apply(&self, mut document: JsonValue) -> JsonValue {
        if let JsonValue::Object(map) = &mut document {
            match self {
                Self::All => {}
                Self::Keep(keep) => map.retain(|key, _| keep.contains(&key.as_str())),
                Self::Drop(drop) => map.retain(|key, _| !drop.contains(&key.as_str())),
            }
        }

        document
    }
}

/// Converts a raw querystring value into a value of the column's type.
///
/// Returns `None` when the value cannot represent that type.
fn coerce<C: ColumnTrait>(column: &C, raw: &str) -> Option<Value> {
    let raw = raw.trim();

    match column.def().get_column_type() {
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger => raw.parse::<i64>().ok().map(Value::from),
        ColumnType::Float | ColumnType::Double | ColumnType::Decimal(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::from),
        ColumnType::Boolean => raw.parse::<bool>().ok().map(Value::from),
        _ => Some(Value::from(raw.to_string())),
    }
}

fn normalize(field: &str) -> String {
    field
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ignores_case_and_underscores() {
        assert_eq!(normalize("createdAt"), normalize("created_at"));
        assert_ne!(normalize("price"), normalize("prices"));
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("lake"), "lake");
    }

    #[test]
    fn coerces_values_to_column_type() {
        use entity::property::Column;

        assert_eq!(coerce(&Column::Bedrooms, "3"), Some(Value::from(3i64)));
        assert_eq!(coerce(&Column::Bedrooms, "three"), None);
        assert_eq!(coerce(&Column::Price, "1500.5"), Some(Value::from(1500.5f64)));
        assert_eq!(coerce(&Column::Price, "NaN"), None);
        assert_eq!(
            coerce(&Column::Category, "flat"),
            Some(Value::from("flat".to_string()))
        );
    }
}
