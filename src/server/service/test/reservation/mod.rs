use super::*;
use crate::server::{
    model::reservation::CreateReservationParams, service::reservation::ReservationService,
};
use uuid::Uuid;

mod create;
mod delete;

fn params(trip_id: Uuid, user_id: Uuid) -> CreateReservationParams {
    CreateReservationParams {
        trip_id,
        user_id,
        status: "pending".to_string(),
    }
}
