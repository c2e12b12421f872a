//! Reservation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a `pending` reservation for `user_id` on `trip_id`.
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
    trip_id: Uuid,
    user_id: Uuid,
) -> Result<entity::reservation::Model, DbErr> {
    create_reservation_with_status(db, trip_id, user_id, "pending").await
}

/// Creates a reservation with an explicit status label.
pub async fn create_reservation_with_status(
    db: &DatabaseConnection,
    trip_id: Uuid,
    user_id: Uuid,
    status: impl Into<String>,
) -> Result<entity::reservation::Model, DbErr> {
    entity::reservation::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        trip_id: ActiveValue::Set(trip_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
