use super::*;
use crate::server::{
    model::trip::{CreateTripParams, UpdateTripParams},
    service::trip::TripService,
};

mod check_reservations;
mod create;
mod delete;
mod set_status;
mod update;

fn rename(name: &str) -> UpdateTripParams {
    UpdateTripParams {
        trip_name: Some(name.to_string()),
        ..Default::default()
    }
}
