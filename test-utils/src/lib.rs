//! Basecamp Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! booking backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn edits_trip() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
