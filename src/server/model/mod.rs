//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod activity;
pub mod association;
pub mod auth;
pub mod catalog;
pub mod certification;
pub mod payment;
pub mod rating;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod user;
