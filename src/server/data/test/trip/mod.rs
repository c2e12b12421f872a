use crate::server::{data::trip::TripRepository, model::trip::UpdateTripParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_ids;
mod update;
