pub mod activity;
pub mod association;
pub mod catalog;
pub mod certification;
pub mod payment;
pub mod rating;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod user;
