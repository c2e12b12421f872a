//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`], so the same repository
//! runs against the pool for reads and against a `DatabaseTransaction` when a service needs
//! a check-then-act sequence to commit or roll back as one unit.

pub mod activity;
pub mod activity_trip;
pub mod catalog;
pub mod certification;
pub mod payment;
pub mod rating;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod trip_resource;
pub mod user;
pub mod user_role;

#[cfg(test)]
mod test;
