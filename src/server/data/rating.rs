use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::rating::{RateTripParams, Rating};

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, DbErr> {
        let rating = entity::prelude::RangerCalification::find()
            .filter(entity::ranger_calification::Column::TripId.eq(trip_id))
            .filter(entity::ranger_calification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(rating.map(Rating::from_entity))
    }

    pub async fn create(&self, user_id: Uuid, params: RateTripParams) -> Result<Rating, DbErr> {
        let now = Utc::now();
        let rating = entity::ranger_calification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            trip_id: ActiveValue::Set(params.trip_id),
            user_id: ActiveValue::Set(user_id),
            ranger_id: ActiveValue::Set(params.ranger_id),
            calification: ActiveValue::Set(params.calification),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(rating))
    }

    /// Replaces the score and comment of an existing rating in place.
    pub async fn update(
        &self,
        id: Uuid,
        calification: i32,
        comment: Option<String>,
    ) -> Result<Rating, DbErr> {
        let rating = entity::ranger_calification::ActiveModel {
            id: ActiveValue::Unchanged(id),
            calification: ActiveValue::Set(calification),
            comment: ActiveValue::Set(comment),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Rating::from_entity(rating))
    }

    /// Gets the raw scores of every rating on the given trips.
    pub async fn get_scores_by_trips(&self, trip_ids: Vec<Uuid>) -> Result<Vec<i32>, DbErr> {
        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RangerCalification::find()
            .select_only()
            .column(entity::ranger_calification::Column::Calification)
            .filter(entity::ranger_calification::Column::TripId.is_in(trip_ids))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn delete_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::RangerCalification::delete_many()
            .filter(entity::ranger_calification::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
