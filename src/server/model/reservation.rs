//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{reservation::ReservationDto, trip::ReservationHolderDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            user_id: entity.user_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            trip_id: self.trip_id,
            user_id: self.user_id,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
}

/// A reservation joined with the contact details of the user holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationHolder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
}

impl ReservationHolder {
    /// Builds a holder from a reservation and its related user row.
    ///
    /// The user is always present under the foreign key; a missing row leaves the
    /// contact fields empty.
    pub fn from_entity(
        reservation: entity::reservation::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        let (first_name, last_name, email) = match user {
            Some(user) => (user.first_name, user.last_name, user.email),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            first_name,
            last_name,
            email,
            status: reservation.status,
        }
    }

    pub fn into_dto(self) -> ReservationHolderDto {
        ReservationHolderDto {
            id: self.id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            status: self.status,
        }
    }
}
