use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::reservation::{
    CreateReservationParams, Reservation, ReservationHolder,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            trip_id: ActiveValue::Set(params.trip_id),
            user_id: ActiveValue::Set(params.user_id),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn find_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Counts reservations held on a trip. Any non-zero count freezes the trip's
    /// structural fields.
    pub async fn count_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .count(self.db)
            .await
    }

    /// Gets the reservations on a trip together with each holder's contact details,
    /// oldest first.
    pub async fn get_holders_by_trip(
        &self,
        trip_id: Uuid,
    ) -> Result<Vec<ReservationHolder>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reservation, user)| ReservationHolder::from_entity(reservation, user))
            .collect())
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Gets the distinct trip ids a user holds reservations on.
    pub async fn get_trip_ids_by_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::TripId)
            .distinct()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }

    /// Deletes a reservation by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the id is unknown)
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the oldest reservation on a trip.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the trip has none)
    pub async fn delete_first_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        let first = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .order_by_asc(entity::reservation::Column::CreatedAt)
            .order_by_asc(entity::reservation::Column::Id)
            .one(self.db)
            .await?;

        match first {
            Some(reservation) => self.delete_by_id(reservation.id).await,
            None => Ok(0),
        }
    }

    pub async fn delete_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
