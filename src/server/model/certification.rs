use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::certification::CertificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub issuing_body: Option<String>,
    pub issued_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
}

impl Certification {
    pub fn from_entity(entity: entity::certification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            issuing_body: entity.issuing_body,
            issued_at: entity.issued_at,
            expires_at: entity.expires_at,
        }
    }

    pub fn into_dto(self) -> CertificationDto {
        CertificationDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            issuing_body: self.issuing_body,
            issued_at: self.issued_at,
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCertificationParams {
    pub user_id: Uuid,
    pub name: String,
    pub issuing_body: Option<String>,
    pub issued_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
}
