//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::{helpers::next_id, user_role::find_or_create_role};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, "Ranger")
///     .username("ranger_rick")
///     .rating(Some(4.5))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    role_name: String,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    user_status: String,
    rating: Option<f64>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - email: `"user_{id}@basecamp.test"`
    /// - password: SHA-256 hex of nothing in particular (never verified in tests)
    /// - user_status: `"activo"`
    /// - rating: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `role_name` - Role the user is created with
    pub fn new(db: &'a DatabaseConnection, role_name: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            role_name: role_name.into(),
            username: format!("user_{}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("user_{}@basecamp.test", id),
            password: "0".repeat(64),
            user_status: "activo".to_string(),
            rating: None,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets first and last name.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the account status (`"activo"` users are listed as rangers).
    pub fn user_status(mut self, user_status: impl Into<String>) -> Self {
        self.user_status = user_status.into();
        self
    }

    /// Sets the aggregate rating column directly.
    pub fn rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the user entity, creating its role row when missing.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let role = find_or_create_role(self.db, &self.role_name).await?;

        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            nationality: ActiveValue::Set(None),
            rut: ActiveValue::Set(None),
            passport_number: ActiveValue::Set(None),
            role_id: ActiveValue::Set(role.id),
            biography: ActiveValue::Set(None),
            biography_extend: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            user_status: ActiveValue::Set(self.user_status),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with the `Ranger` role.
pub async fn create_ranger(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, "Ranger").build().await
}

/// Creates a user with the `Explorer` role.
pub async fn create_explorer(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, "Explorer").build().await
}

/// Creates a user with the `Admin` role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, "Admin").build().await
}
