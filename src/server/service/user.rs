use sea_orm::{DatabaseConnection, TransactionTrait};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::server::{
    data::{user::UserRepository, user_role::UserRoleRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthContext, Role},
        user::{NewUser, RangerSummary, RegisterUserParams, UpdateProfileParams, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user under an existing role.
    ///
    /// The password is stored as its SHA-256 hex digest and the account starts active.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Role does not exist
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        if UserRoleRepository::new(&txn)
            .find_by_id(params.role_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("role_id does not exist".to_string()));
        }

        let repo = UserRepository::new(&txn);
        if repo.username_exists(&params.username).await? {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }
        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = repo
            .create(NewUser {
                password_hash: hash_password(&params.password),
                username: params.username,
                first_name: params.first_name,
                last_name: params.last_name,
                nationality: params.nationality,
                rut: params.rut,
                passport_number: params.passport_number,
                role_id: params.role_id,
                biography: params.biography,
                email: params.email,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Username or email already taken"))?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Lists active users holding the ranger role.
    pub async fn get_rangers(&self) -> Result<Vec<RangerSummary>, AppError> {
        let Some(role) = UserRoleRepository::new(self.db)
            .find_by_name(Role::Ranger.as_str())
            .await?
        else {
            tracing::warn!("Ranger role is not seeded");
            return Ok(Vec::new());
        };

        Ok(UserRepository::new(self.db)
            .get_active_by_role(role.id)
            .await?)
    }

    pub async fn get_profile(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates the caller's own biography fields.
    ///
    /// `biography_extend` is merged key by key onto the stored value, so absent keys keep
    /// their current contents.
    ///
    /// # Returns
    /// - `Ok(User)` - The user after the update
    /// - `Err(AppError::AuthErr(Forbidden))` - Caller is editing another user
    /// - `Err(AppError::BadRequest)` - Extended biography fields are invalid
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_profile(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        if ctx.user_id != id {
            return Err(AuthError::Forbidden {
                user_id: ctx.user_id,
                reason: "cannot edit another user's profile".to_string(),
            }
            .into());
        }
        if let Some(extend) = &params.biography_extend {
            extend.validate().map_err(AppError::BadRequest)?;
        }

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if params.biography.is_none() && params.biography_extend.is_none() {
            return Ok(user);
        }

        let biography_extend = params
            .biography_extend
            .map(|update| {
                user.biography_extend
                    .clone()
                    .unwrap_or_default()
                    .merge(update)
                    .to_json()
            })
            .transpose()?;

        let user = repo
            .update_profile(id, params.biography, biography_extend)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = %id, "Profile updated");

        Ok(user)
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
