//! Devcamp Test Utils
//!
//! Shared testing utilities for the devcamp API. Provides a builder pattern for
//! creating test contexts backed by in-memory SQLite databases, along with
//! fixtures and factories for bootcamp test data.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Bootcamp;
//!
//! #[tokio::test]
//! async fn test_bootcamp_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Bootcamp)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
