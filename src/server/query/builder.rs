//! Chainable listing query built from request parameters.
//!
//! Stages only record constraints in a [`QuerySpec`]; nothing touches the
//! store until [`QueryBuilder::count_total`] or [`QueryBuilder::fetch`] runs.
//! Because predicates are accumulated and ANDed at execution time, narrowing
//! stages may be called in any order with the same result.
//!
//! Stages never fail. Missing or malformed parameters fall back to defaults or
//! leave the query unchanged.

use serde::Serialize;

use crate::{
    model::api::PaginationMetaDto,
    server::{
        error::query::QueryError,
        query::{
            collection::Collection,
            params::{split_list, QueryParams, DEFAULT_SORT},
            predicate::{PageWindow, Predicate, Projection, QuerySpec, SortKey},
        },
    },
};

/// Field constrained by the `price` range parameter.
pub const PRICE_FIELD: &str = "price";

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(rename = "totalPage")]
    pub total_page: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_page = if limit > 0 { total.div_ceil(limit) } else { 0 };

        Self {
            page,
            limit,
            total,
            total_page,
        }
    }

    pub fn into_dto(self) -> PaginationMetaDto {
        PaginationMetaDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_page: self.total_page,
        }
    }
}

/// One page of documents with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub meta: PaginationMeta,
    pub result: Vec<T>,
}

pub struct QueryBuilder<'a, C> {
    collection: &'a C,
    params: &'a QueryParams,
    spec: QuerySpec,
}

impl<'a, C> QueryBuilder<'a, C>
where
    C: Collection,
{
    /// Starts a query over every document of `collection`.
    pub fn new(collection: &'a C, params: &'a QueryParams) -> Self {
        Self {
            collection,
            params,
            spec: QuerySpec::default(),
        }
    }

    /// Restricts results to documents where any of `fields` contains the
    /// `searchTerm` parameter, ignoring case.
    pub fn search(mut self, fields: &[&str]) -> Self {
        if fields.is_empty() {
            return self;
        }

        if let Some(term) = self.params.search_term() {
            self.spec.predicates.push(Predicate::ContainsAny {
                fields: fields.iter().map(|field| field.to_string()).collect(),
                term: term.to_string(),
            });
        }

        self
    }

    /// Applies every non-reserved parameter as a field constraint.
    ///
    /// A value containing a comma matches any of its entries; any other value
    /// must match exactly.
    pub fn filter(mut self) -> Self {
        for (field, value) in &self.params.filters {
            let predicate = if value.contains(',') {
                Predicate::OneOf {
                    field: field.clone(),
                    values: split_list(value),
                }
            } else {
                Predicate::Equals {
                    field: field.clone(),
                    value: value.clone(),
                }
            };

            self.spec.predicates.push(predicate);
        }

        self
    }

    /// Restricts `price` to the inclusive `min-max` range of the `price`
    /// parameter. Bounds that are not finite numbers leave the query unchanged.
    pub fn range_filter(mut self) -> Self {
        let Some(range) = self.params.price.as_deref() else {
            return self;
        };

        if !range.contains('-') {
            return self;
        }

        let mut bounds = range.split('-').map(parse_bound);
        if let (Some(Some(min)), Some(Some(max))) = (bounds.next(), bounds.next()) {
            self.spec.predicates.push(Predicate::Between {
                field: PRICE_FIELD.to_string(),
                min,
                max,
            });
        } else {
            tracing::debug!("Ignoring malformed price range '{}'", range);
        }

        self
    }

    /// Orders results by the `sort` parameter, newest first by default.
    pub fn sort(mut self) -> Self {
        let mut keys: Vec<SortKey> = self
            .params
            .sort
            .as_deref()
            .map(|sort| sort.split(',').filter_map(SortKey::parse).collect())
            .unwrap_or_default();

        if keys.is_empty() {
            keys = DEFAULT_SORT.split(',').filter_map(SortKey::parse).collect();
        }

        self.spec.sort = keys;
        self
    }

    /// Projects results to the fields named by the `fields` parameter.
    pub fn fields(mut self) -> Self {
        let tokens = self
            .params
            .fields
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        self.spec.projection = Projection::from_tokens(&tokens);
        self
    }

    /// Windows results to the requested `page` of `limit` documents.
    pub fn paginate(mut self) -> Self {
        self.spec.window = Some(PageWindow {
            page: self.params.page(),
            limit: self.params.limit(),
        });
        self
    }

    /// The query composed so far.
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// Counts every document matching the accumulated predicates.
    ///
    /// Sort, projection, and the page window do not affect the total.
    pub async fn count_total(&self) -> Result<PaginationMeta, QueryError> {
        let total = self.collection.count(&self.spec.predicates).await?;

        Ok(PaginationMeta::new(
            self.params.page(),
            self.params.limit(),
            total,
        ))
    }

    /// Fetches the documents selected by the composed query.
    pub async fn fetch(&self) -> Result<Vec<C::Document>, QueryError> {
        self.collection.fetch(&self.spec).await
    }

    /// Runs both terminal operations.
    pub async fn execute(self) -> Result<Paginated<C::Document>, QueryError> {
        let meta = self.count_total().await?;
        let result = self.fetch().await?;

        Ok(Paginated { meta, result })
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
