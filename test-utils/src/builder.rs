use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the schema a test needs and creates it in a fresh in-memory database.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_property_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table of `entity`, derived from its SeaORM definition.
    ///
    /// Tables are created in the order they are queued, so referenced tables go first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues `property` and then `property_image`.
    pub fn with_property_tables(self) -> Self {
        self.with_table(Property).with_table(PropertyImage)
    }

    /// Opens the database and creates every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the prepared database
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
