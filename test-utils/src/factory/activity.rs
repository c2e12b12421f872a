//! Factories for activities and the catalog rows they depend on.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an activity category named `"Category {id}"`.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::activity_category::Model, DbErr> {
    entity::activity_category::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(format!("Category {}", next_id())),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a location in the given country and optional province.
pub async fn create_location(
    db: &DatabaseConnection,
    country: impl Into<String>,
    province: Option<&str>,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        place_name: ActiveValue::Set(format!("Place {}", next_id())),
        country: ActiveValue::Set(country.into()),
        province: ActiveValue::Set(province.map(str::to_string)),
        latitude: ActiveValue::Set(None),
        longitude: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates an activity along with a fresh category and location.
///
/// Defaults: duration `2.5`, participants `1..=10`, cost `25.0`, available and public.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    let category = create_category(db).await?;
    let location = create_location(db, "Chile", Some("Magallanes")).await?;

    entity::activity::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        category_id: ActiveValue::Set(category.id),
        location_id: ActiveValue::Set(location.id),
        name: ActiveValue::Set(format!("Activity {}", next_id())),
        description: ActiveValue::Set(None),
        duration: ActiveValue::Set(2.5),
        difficulty: ActiveValue::Set(Some("medium".to_string())),
        min_participants: ActiveValue::Set(1),
        max_participants: ActiveValue::Set(10),
        is_available: ActiveValue::Set(true),
        is_public: ActiveValue::Set(true),
        cost: ActiveValue::Set(25.0),
        activity_image_url: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Links an activity to a trip.
pub async fn create_activity_trip(
    db: &DatabaseConnection,
    trip_id: Uuid,
    activity_id: Uuid,
) -> Result<entity::activity_trip::Model, DbErr> {
    entity::activity_trip::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        activity_id: ActiveValue::Set(activity_id),
        trip_id: ActiveValue::Set(trip_id),
    }
    .insert(db)
    .await
}
