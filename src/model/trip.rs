use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TripDto {
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

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TripListDto {
    pub trips: Vec<TripDto>,
}

/// Body of `POST /trips`.
///
/// `trip_name`, `lead_ranger`, `start_date` and `end_date` are required; dates use
/// `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateTripDto {
    pub trip_name: Option<String>,
    pub lead_ranger: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub participants_number: Option<i32>,
    pub trip_status: Option<String>,
    pub estimated_weather_forecast: Option<String>,
    pub description: Option<String>,
    pub total_cost: Option<f64>,
    pub trip_image_url: Option<String>,
}

/// Body of `PUT /trips/{id}`.
///
/// Only these fields can be edited. Anything else in the body is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTripDto {
    pub trip_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub participants_number: Option<i32>,
    pub estimated_weather_forecast: Option<String>,
    pub description: Option<String>,
    pub total_cost: Option<f64>,
    pub trip_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateTripStatusDto {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DeleteTripDto {
    pub message: String,
    pub activities_removed: u64,
    pub resources_removed: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReservationHolderDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReservationCheckDto {
    pub has_reservations: bool,
    pub count: u64,
    pub reservations: Vec<ReservationHolderDto>,
}
