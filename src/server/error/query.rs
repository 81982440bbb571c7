use thiserror::Error;

/// Failure of a listing query against its backing store.
///
/// Query stages never fail on their own; only the terminal count and fetch
/// can, when the store itself reports an error.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The backing store failed to execute a count or fetch.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Query execution failed: {0}")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    pub fn execution<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Execution(Box::new(err))
    }
}
