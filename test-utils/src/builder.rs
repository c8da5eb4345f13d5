use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables with `with_table()`, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Bootcamp;
///
/// let test = TestBuilder::new()
///     .with_table(Bootcamp)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder and executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. The statement carries the entity's
    /// constraints, including the unique index on the bootcamp name.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for bootcamp operations.
    ///
    /// Convenience for the common case; currently the schema is the single
    /// bootcamp table.
    pub fn with_bootcamp_tables(self) -> Self {
        self.with_table(Bootcamp)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every table
    /// added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database connected and schema applied
    /// - `Err(TestError::Database)` - Failed to connect or create tables
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
