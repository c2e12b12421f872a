//! Role factory. Roles are unique by name, so lookups reuse an existing row.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

/// Returns the role with the given name, inserting it first if it does not exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - One of `Explorer`, `Ranger`, `Admin` (any name is accepted)
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Existing or created role
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<entity::user_role::Model, DbErr> {
    if let Some(role) = entity::prelude::UserRole::find()
        .filter(entity::user_role::Column::RoleName.eq(role_name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::user_role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        role_name: ActiveValue::Set(role_name.to_string()),
    }
    .insert(db)
    .await
}
