use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::model::catalog::UserRole;

pub struct UserRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRole>, DbErr> {
        let role = entity::prelude::UserRole::find_by_id(id).one(self.db).await?;

        Ok(role.map(UserRole::from_entity))
    }

    pub async fn find_by_name(&self, role_name: &str) -> Result<Option<UserRole>, DbErr> {
        let role = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::RoleName.eq(role_name))
            .one(self.db)
            .await?;

        Ok(role.map(UserRole::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<UserRole>, DbErr> {
        let roles = entity::prelude::UserRole::find()
            .order_by_asc(entity::user_role::Column::RoleName)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(UserRole::from_entity).collect())
    }
}
