//! Factories for resources and trip-resource links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a resource with the given unique name and a small JSON description.
pub async fn create_resource_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::resource::Model, DbErr> {
    entity::resource::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(serde_json::json!({ "summary": "Test resource" })),
        cost: ActiveValue::Set(10.0),
    }
    .insert(db)
    .await
}

/// Creates a resource named `"Resource {id}"`.
pub async fn create_resource(db: &DatabaseConnection) -> Result<entity::resource::Model, DbErr> {
    create_resource_named(db, format!("Resource {}", next_id())).await
}

/// Links a resource to a trip.
pub async fn create_trip_resource(
    db: &DatabaseConnection,
    trip_id: Uuid,
    resource_id: Uuid,
) -> Result<entity::trip_resource::Model, DbErr> {
    entity::trip_resource::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        trip_id: ActiveValue::Set(trip_id),
        resource_id: ActiveValue::Set(resource_id),
    }
    .insert(db)
    .await
}
