use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{certification::CertificationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::AuthContext,
        certification::{Certification, CreateCertificationParams},
    },
};

pub struct CertificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a certification to the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(Certification)` - The stored certification
    /// - `Err(AppError::AuthErr(Forbidden))` - `user_id` is not the caller
    /// - `Err(AppError::BadRequest)` - Expiry precedes issue date
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn create(
        &self,
        ctx: &AuthContext,
        params: CreateCertificationParams,
    ) -> Result<Certification, AppError> {
        if ctx.user_id != params.user_id {
            return Err(AuthError::Forbidden {
                user_id: ctx.user_id,
                reason: "cannot add certifications for another user".to_string(),
            }
            .into());
        }
        if let (Some(issued), Some(expires)) = (params.issued_at, params.expires_at) {
            if expires < issued {
                return Err(AppError::BadRequest(
                    "expires_at must not precede issued_at".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let certification = CertificationRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            certification_id = %certification.id,
            user_id = %certification.user_id,
            "Certification added"
        );

        Ok(certification)
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Certification>, AppError> {
        Ok(CertificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }
}
