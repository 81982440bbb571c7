use async_trait::async_trait;

use crate::server::{
    error::query::QueryError,
    query::predicate::{Predicate, QuerySpec},
};

/// A queryable document collection.
///
/// Implementations translate the accumulated [`QuerySpec`] into the native
/// query of their backing store. Nothing is executed until one of these
/// methods is called.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Document type returned by [`Collection::fetch`].
    type Document: Send;

    /// Counts every document matching all `predicates`.
    async fn count(&self, predicates: &[Predicate]) -> Result<u64, QueryError>;

    /// Fetches the documents selected by `spec`, sorted, projected, and
    /// windowed.
    async fn fetch(&self, spec: &QuerySpec) -> Result<Vec<Self::Document>, QueryError>;
}
