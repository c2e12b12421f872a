use crate::server::data::trip_resource::TripResourceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_blocking_trips;
