//! SeaORM entity models for the expedition booking store.
//!
//! One module per table. Join tables (`activity_trips`, `trip_resources`) are plain
//! records owned by neither endpoint; reservations, payments and ratings reference
//! trips and users by identifier only.

pub mod prelude;

pub mod activity;
pub mod activity_category;
pub mod activity_trip;
pub mod certification;
pub mod location;
pub mod payment;
pub mod ranger_calification;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod trip_resource;
pub mod user;
pub mod user_role;
