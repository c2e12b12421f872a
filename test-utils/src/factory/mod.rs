//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the identifiers of the rows they depend
//! on, so foreign keys are always satisfied; `helpers` builds whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let ranger = factory::create_ranger(&db).await?;
//!     let trip = factory::create_trip(&db, ranger.id).await?;
//!     let explorer = factory::create_explorer(&db).await?;
//!     let reservation = factory::create_reservation(&db, trip.id, explorer.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let trip = factory::trip::TripFactory::new(&db, ranger.id)
//!     .trip_name("Glacier crossing")
//!     .trip_status("Confirmado")
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod certification;
pub mod helpers;
pub mod payment;
pub mod rating;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod user;
pub mod user_role;

pub use activity::{create_activity, create_activity_trip};
pub use payment::create_payment;
pub use rating::create_rating;
pub use reservation::create_reservation;
pub use resource::{create_resource, create_trip_resource};
pub use trip::create_trip;
pub use user::{create_admin, create_explorer, create_ranger};
