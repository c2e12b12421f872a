//! Rating (calification) factory.
//!
//! Inserts rows directly without recomputing the ranger aggregate; use the rating
//! service when the aggregate matters.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a calification by `user_id` for `trip_id` led by `ranger_id`.
pub async fn create_rating(
    db: &DatabaseConnection,
    trip_id: Uuid,
    user_id: Uuid,
    ranger_id: Uuid,
    calification: i32,
) -> Result<entity::ranger_calification::Model, DbErr> {
    let now = Utc::now();
    entity::ranger_calification::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        trip_id: ActiveValue::Set(trip_id),
        user_id: ActiveValue::Set(user_id),
        ranger_id: ActiveValue::Set(ranger_id),
        calification: ActiveValue::Set(calification),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
