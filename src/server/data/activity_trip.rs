use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::association::ActivityTrip;

pub struct ActivityTripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityTripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_pair(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<Option<ActivityTrip>, DbErr> {
        let link = entity::prelude::ActivityTrip::find()
            .filter(entity::activity_trip::Column::TripId.eq(trip_id))
            .filter(entity::activity_trip::Column::ActivityId.eq(activity_id))
            .one(self.db)
            .await?;

        Ok(link.map(ActivityTrip::from_entity))
    }

    pub async fn create(&self, trip_id: Uuid, activity_id: Uuid) -> Result<ActivityTrip, DbErr> {
        let link = entity::activity_trip::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            activity_id: ActiveValue::Set(activity_id),
            trip_id: ActiveValue::Set(trip_id),
        }
        .insert(self.db)
        .await?;

        Ok(ActivityTrip::from_entity(link))
    }

    /// Removes the link for the exact pair.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the pair was not linked)
    pub async fn delete_pair(&self, trip_id: Uuid, activity_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::ActivityTrip::delete_many()
            .filter(entity::activity_trip::Column::TripId.eq(trip_id))
            .filter(entity::activity_trip::Column::ActivityId.eq(activity_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every activity link of a trip.
    pub async fn delete_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::ActivityTrip::delete_many()
            .filter(entity::activity_trip::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_activity_ids_by_trip(&self, trip_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::ActivityTrip::find()
            .select_only()
            .column(entity::activity_trip::Column::ActivityId)
            .filter(entity::activity_trip::Column::TripId.eq(trip_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }
}
