//! Typed request-query boundary for collection listings.
//!
//! `QueryParams` is deserialized straight from the querystring. The reserved
//! keys the query builder interprets itself get dedicated fields; every other
//! key falls through to `filters` and is treated as a field constraint.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Page used when `page` is absent, zero, or not a number.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `limit` is absent, zero, or not a number.
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page size served; larger `limit` values are clamped to it.
pub const MAX_LIMIT: u64 = 100;

/// Sort applied when the request does not specify one.
pub const DEFAULT_SORT: &str = "-createdAt";

/// Raw listing parameters as decoded from an HTTP querystring.
///
/// Numeric parameters are kept as strings so that malformed values degrade to
/// defaults instead of rejecting the request at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryParams {
    /// Free-text term matched against the searchable fields of a collection.
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    /// Inclusive price range encoded as `min-max`.
    #[serde(default)]
    pub price: Option<String>,
    /// Comma separated sort fields, `-` prefix for descending.
    #[serde(default)]
    pub sort: Option<String>,
    /// Comma separated projection, `-` prefix to exclude a field.
    #[serde(default)]
    pub fields: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    /// Every remaining querystring key.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl QueryParams {
    /// Returns the search term if one was supplied and is not blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Effective page number, falling back to [`DEFAULT_PAGE`].
    pub fn page(&self) -> u64 {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size, falling back to [`DEFAULT_LIMIT`] and capped at
    /// [`MAX_LIMIT`].
    pub fn limit(&self) -> u64 {
        parse_positive(self.limit.as_deref())
            .map(|limit| limit.min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|parsed| *parsed > 0)
}

/// Splits a comma separated querystring value, trimming entries and dropping
/// empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
