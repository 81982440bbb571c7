//! Generic collection listing queries.
//!
//! Turns untrusted querystring parameters into a filtered, searched, sorted,
//! projected, and paginated read against any [`Collection`], plus the
//! pagination metadata for the page.
//!
//! ```rust,ignore
//! let collection = EntityCollection::<entity::prelude::Property>::new(db);
//! let page = QueryBuilder::new(&collection, &params)
//!     .search(&["title", "address"])
//!     .filter()
//!     .range_filter()
//!     .sort()
//!     .fields()
//!     .paginate()
//!     .execute()
//!     .await?;
//! ```

pub mod builder;
pub mod collection;
pub mod entity_collection;
pub mod params;
pub mod predicate;

#[cfg(test)]
mod test;

pub use builder::{Paginated, PaginationMeta, QueryBuilder};
pub use collection::Collection;
pub use entity_collection::EntityCollection;
pub use params::QueryParams;
