use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{
    catalog::UserRole,
    user::{NewUser, RangerSummary, User},
};

/// Status of accounts that appear in public ranger listings.
pub const ACTIVE_USER_STATUS: &str = "activo";

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user with `activo` status and no rating.
    ///
    /// # Arguments
    /// - `user` - Insert-ready fields; the password is already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(user.username),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            nationality: ActiveValue::Set(user.nationality),
            rut: ActiveValue::Set(user.rut),
            passport_number: ActiveValue::Set(user.passport_number),
            role_id: ActiveValue::Set(user.role_id),
            biography: ActiveValue::Set(user.biography),
            biography_extend: ActiveValue::Set(None),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password_hash),
            user_status: ActiveValue::Set(ACTIVE_USER_STATUS.to_string()),
            rating: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        User::from_entity(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user and holds an exclusive row lock on it until the transaction ends.
    ///
    /// Serialises writers of the `rating` aggregate. A no-op lock on SQLite.
    pub async fn find_by_id_for_update(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user together with their role row.
    ///
    /// # Returns
    /// - `Ok(Some((user, Some(role))))` - User and role found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error or malformed profile JSON
    pub async fn find_with_role(
        &self,
        id: Uuid,
    ) -> Result<Option<(User, Option<UserRole>)>, DbErr> {
        let Some((user, role)) = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::UserRole)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some((
            User::from_entity(user)?,
            role.map(UserRole::from_entity),
        )))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(user.is_some())
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.is_some())
    }

    /// Gets active users holding a role, ordered by last name.
    pub async fn get_active_by_role(&self, role_id: Uuid) -> Result<Vec<RangerSummary>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::RoleId.eq(role_id))
            .filter(entity::user::Column::UserStatus.eq(ACTIVE_USER_STATUS))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(RangerSummary::from_entity).collect())
    }

    /// Overwrites the aggregate rating column.
    pub async fn update_rating(&self, id: Uuid, rating: Option<f64>) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            rating: ActiveValue::Set(rating),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Writes the profile columns that are `Some`.
    pub async fn update_profile(
        &self,
        id: Uuid,
        biography: Option<String>,
        biography_extend: Option<serde_json::Value>,
    ) -> Result<User, DbErr> {
        let mut user = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(biography) = biography {
            user.biography = ActiveValue::Set(Some(biography));
        }
        if let Some(extend) = biography_extend {
            user.biography_extend = ActiveValue::Set(Some(extend));
        }

        let user = user.update(self.db).await?;

        User::from_entity(user)
    }
}
