use crate::server::data::reservation::ReservationRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_trip;
mod delete_first_by_trip;
