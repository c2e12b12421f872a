//! Business logic layer.
//!
//! Services sit between controllers and repositories. Every mutating operation opens one
//! database transaction, runs its existence, uniqueness and reservation checks through
//! repositories bound to that transaction, and commits only after the final write. Any
//! early return drops the transaction, which rolls it back.

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

#[cfg(test)]
mod test;
