use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// In-memory SQLite URL; every context gets its own private database.
const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// A private database for one test.
///
/// The connection is opened on first use. Dropping the context drops the
/// in-memory database with it.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the context's connection, opening it if this is the first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => {
                let mut options = ConnectOptions::new(MEMORY_DATABASE_URL);
                options.sqlx_logging(false);
                Database::connect(options).await?
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by [`TestBuilder::build`](crate::builder::TestBuilder::build); tables
    /// with foreign keys must come after the tables they reference.
    pub async fn with_tables(
        &mut self,
        statements: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for statement in &statements {
            db.execute(statement).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
