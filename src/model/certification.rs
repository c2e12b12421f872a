use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CertificationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub issuing_body: Option<String>,
    pub issued_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CertificationListDto {
    pub certifications: Vec<CertificationDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateCertificationDto {
    pub name: Option<String>,
    pub issuing_body: Option<String>,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
}
