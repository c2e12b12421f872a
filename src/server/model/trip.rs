//! Trip domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    model::trip::{ReservationCheckDto, TripDto},
    server::model::reservation::ReservationHolder,
};

pub const DEFAULT_TRIP_STATUS: &str = "pending";

/// A scheduled expedition led by one ranger.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub trip_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants_number: i32,
    pub trip_status: String,
    pub estimated_weather_forecast: String,
    pub description: String,
    pub total_cost: f64,
    pub trip_image_url: String,
    pub lead_ranger: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            trip_name: entity.trip_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            participants_number: entity.participants_number,
            trip_status: entity.trip_status,
            estimated_weather_forecast: entity.estimated_weather_forecast,
            description: entity.description,
            total_cost: entity.total_cost,
            trip_image_url: entity.trip_image_url,
            lead_ranger: entity.lead_ranger,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO at the controller boundary.
    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            trip_name: self.trip_name,
            start_date: self.start_date,
            end_date: self.end_date,
            participants_number: self.participants_number,
            trip_status: self.trip_status,
            estimated_weather_forecast: self.estimated_weather_forecast,
            description: self.description,
            total_cost: self.total_cost,
            trip_image_url: self.trip_image_url,
            lead_ranger: self.lead_ranger,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a trip. Optional fields have already been defaulted.
#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub trip_name: String,
    pub lead_ranger: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants_number: i32,
    pub trip_status: String,
    pub estimated_weather_forecast: String,
    pub description: String,
    pub total_cost: f64,
    pub trip_image_url: String,
}

/// Allow-listed structural fields an edit may change. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateTripParams {
    pub trip_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub participants_number: Option<i32>,
    pub estimated_weather_forecast: Option<String>,
    pub description: Option<String>,
    pub total_cost: Option<f64>,
    pub trip_image_url: Option<String>,
}

impl UpdateTripParams {
    pub fn is_empty(&self) -> bool {
        self.trip_name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.participants_number.is_none()
            && self.estimated_weather_forecast.is_none()
            && self.description.is_none()
            && self.total_cost.is_none()
            && self.trip_image_url.is_none()
    }
}

/// What a successful trip delete removed alongside the trip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripDeletion {
    pub activities_removed: u64,
    pub resources_removed: u64,
}

/// Reservations currently held on a trip.
#[derive(Debug, Clone)]
pub struct ReservationCheck {
    pub reservations: Vec<ReservationHolder>,
}

impl ReservationCheck {
    pub fn count(&self) -> u64 {
        self.reservations.len() as u64
    }

    pub fn into_dto(self) -> ReservationCheckDto {
        ReservationCheckDto {
            has_reservations: !self.reservations.is_empty(),
            count: self.count(),
            reservations: self
                .reservations
                .into_iter()
                .map(ReservationHolder::into_dto)
                .collect(),
        }
    }
}
