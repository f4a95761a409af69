//! Nanna Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bot.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories with sensible defaults
//! - **serenity**: Factories for Serenity model values (roles)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{Guild, Role};
//!
//! #[tokio::test]
//! async fn test_role_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Guild)
//!         .with_table(Role)
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
pub mod serenity;
