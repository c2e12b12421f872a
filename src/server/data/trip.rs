use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::trip::{CreateTripParams, Trip, UpdateTripParams};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new trip row.
    ///
    /// # Arguments
    /// - `params` - Fully defaulted trip fields
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(DbErr)` - Database error, including a foreign key failure on `lead_ranger`
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, DbErr> {
        let trip = entity::trip::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            trip_name: ActiveValue::Set(params.trip_name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            participants_number: ActiveValue::Set(params.participants_number),
            trip_status: ActiveValue::Set(params.trip_status),
            estimated_weather_forecast: ActiveValue::Set(params.estimated_weather_forecast),
            description: ActiveValue::Set(params.description),
            total_cost: ActiveValue::Set(params.total_cost),
            trip_image_url: ActiveValue::Set(params.trip_image_url),
            lead_ranger: ActiveValue::Set(params.lead_ranger),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(trip))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, DbErr> {
        let trip = entity::prelude::Trip::find_by_id(id).one(self.db).await?;

        Ok(trip.map(Trip::from_entity))
    }

    /// Fetches a trip and takes an exclusive row lock on it.
    ///
    /// Must run inside a transaction: the lock is held until commit or rollback, so a
    /// reservation cannot be inserted against the trip while a structural change is
    /// being checked. Backends without row locks (SQLite) run a plain select.
    pub async fn find_by_id_for_update(&self, id: Uuid) -> Result<Option<Trip>, DbErr> {
        let trip = entity::prelude::Trip::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(trip.map(Trip::from_entity))
    }

    /// Gets every trip ordered by start date.
    pub async fn get_all(&self) -> Result<Vec<Trip>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(trips.into_iter().map(Trip::from_entity).collect())
    }

    /// Gets trips led by a ranger ordered by start date.
    pub async fn get_by_lead_ranger(&self, ranger_id: Uuid) -> Result<Vec<Trip>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::LeadRanger.eq(ranger_id))
            .order_by_asc(entity::trip::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(trips.into_iter().map(Trip::from_entity).collect())
    }

    /// Gets the ids of every trip led by a ranger.
    pub async fn get_ids_by_lead_ranger(&self, ranger_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Trip::find()
            .select_only()
            .column(entity::trip::Column::Id)
            .filter(entity::trip::Column::LeadRanger.eq(ranger_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Trip>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::Id.is_in(ids))
            .order_by_asc(entity::trip::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(trips.into_iter().map(Trip::from_entity).collect())
    }

    /// Writes the allow-listed fields present in `params`; absent fields are untouched.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No trip with that id
    pub async fn update(&self, id: Uuid, params: UpdateTripParams) -> Result<Trip, DbErr> {
        let mut trip = entity::trip::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(trip_name) = params.trip_name {
            trip.trip_name = ActiveValue::Set(trip_name);
        }
        if let Some(start_date) = params.start_date {
            trip.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            trip.end_date = ActiveValue::Set(end_date);
        }
        if let Some(participants_number) = params.participants_number {
            trip.participants_number = ActiveValue::Set(participants_number);
        }
        if let Some(forecast) = params.estimated_weather_forecast {
            trip.estimated_weather_forecast = ActiveValue::Set(forecast);
        }
        if let Some(description) = params.description {
            trip.description = ActiveValue::Set(description);
        }
        if let Some(total_cost) = params.total_cost {
            trip.total_cost = ActiveValue::Set(total_cost);
        }
        if let Some(trip_image_url) = params.trip_image_url {
            trip.trip_image_url = ActiveValue::Set(trip_image_url);
        }

        let trip = trip.update(self.db).await?;

        Ok(Trip::from_entity(trip))
    }

    pub async fn update_status(&self, id: Uuid, status: String) -> Result<Trip, DbErr> {
        let trip = entity::trip::ActiveModel {
            id: ActiveValue::Unchanged(id),
            trip_status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Trip::from_entity(trip))
    }

    /// Deletes the trip row only; dependents must already be gone.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Trip::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
