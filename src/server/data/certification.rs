use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::certification::{Certification, CreateCertificationParams};

pub struct CertificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CertificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCertificationParams) -> Result<Certification, DbErr> {
        let certification = entity::certification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            issuing_body: ActiveValue::Set(params.issuing_body),
            issued_at: ActiveValue::Set(params.issued_at),
            expires_at: ActiveValue::Set(params.expires_at),
        }
        .insert(self.db)
        .await?;

        Ok(Certification::from_entity(certification))
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Certification>, DbErr> {
        let certifications = entity::prelude::Certification::find()
            .filter(entity::certification::Column::UserId.eq(user_id))
            .order_by_asc(entity::certification::Column::Name)
            .all(self.db)
            .await?;

        Ok(certifications
            .into_iter()
            .map(Certification::from_entity)
            .collect())
    }
}
