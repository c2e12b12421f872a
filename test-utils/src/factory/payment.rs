//! Payment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a `Pendiente` transfer payment of `amount` for (`trip_id`, `user_id`).
pub async fn create_payment(
    db: &DatabaseConnection,
    trip_id: Uuid,
    user_id: Uuid,
    amount: f64,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        trip_id: ActiveValue::Set(trip_id),
        amount: ActiveValue::Set(Some(amount)),
        payment_method: ActiveValue::Set(Some("transfer".to_string())),
        voucher_url: ActiveValue::Set(None),
        status: ActiveValue::Set("Pendiente".to_string()),
        payment_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
