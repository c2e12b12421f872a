//! Certification factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a certification named `"Certification {id}"` for `user_id`.
pub async fn create_certification(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::certification::Model, DbErr> {
    entity::certification::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("Certification {}", next_id())),
        issuing_body: ActiveValue::Set(Some("Wilderness First Aid Council".to_string())),
        issued_at: ActiveValue::Set(None),
        expires_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
