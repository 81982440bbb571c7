//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It holds the database
//! connection pool and the upload directory; everything request-specific,
//! including the files written during an upload, lives in the handler.

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<PathBuf>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Root directory for uploaded files.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `upload_dir` - Root directory for uploaded files
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, upload_dir: PathBuf) -> Self {
        Self {
            db,
            upload_dir: Arc::new(upload_dir),
        }
    }
}
