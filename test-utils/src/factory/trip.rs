//! Trip factory for creating test trip entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test trips with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trip::TripFactory;
///
/// let trip = TripFactory::new(&db, ranger.id)
///     .trip_name("Volcano ascent")
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    lead_ranger: Uuid,
    trip_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    participants_number: i32,
    trip_status: String,
    total_cost: f64,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - trip_name: `"Trip {id}"`
    /// - start_date: 30 days from today, end_date: 33 days from today
    /// - participants_number: `8`
    /// - trip_status: `"pending"`
    /// - total_cost: `0.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `lead_ranger` - ID of the user leading the trip
    pub fn new(db: &'a DatabaseConnection, lead_ranger: Uuid) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            lead_ranger,
            trip_name: format!("Trip {}", id),
            start_date: today + Duration::days(30),
            end_date: today + Duration::days(33),
            participants_number: 8,
            trip_status: "pending".to_string(),
            total_cost: 0.0,
        }
    }

    /// Sets the trip name.
    pub fn trip_name(mut self, trip_name: impl Into<String>) -> Self {
        self.trip_name = trip_name.into();
        self
    }

    /// Sets the schedule.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Sets the status label.
    pub fn trip_status(mut self, trip_status: impl Into<String>) -> Self {
        self.trip_status = trip_status.into();
        self
    }

    /// Sets the seat capacity.
    pub fn participants_number(mut self, participants_number: i32) -> Self {
        self.participants_number = participants_number;
        self
    }

    /// Sets the total cost.
    pub fn total_cost(mut self, total_cost: f64) -> Self {
        self.total_cost = total_cost;
        self
    }

    /// Builds and inserts the trip entity into the database.
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            trip_name: ActiveValue::Set(self.trip_name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            participants_number: ActiveValue::Set(self.participants_number),
            trip_status: ActiveValue::Set(self.trip_status),
            estimated_weather_forecast: ActiveValue::Set(String::new()),
            description: ActiveValue::Set("Test trip description".to_string()),
            total_cost: ActiveValue::Set(self.total_cost),
            trip_image_url: ActiveValue::Set(String::new()),
            lead_ranger: ActiveValue::Set(self.lead_ranger),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending trip led by `lead_ranger` with default values.
pub async fn create_trip(
    db: &DatabaseConnection,
    lead_ranger: Uuid,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, lead_ranger).build().await
}
