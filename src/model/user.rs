use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Typed view of the free-form `biography_extend` profile column.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct BiographyExtendDto {
    pub languages: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub specialties: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterUserDto {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub rut: Option<String>,
    pub passport_number: Option<String>,
    pub role_id: Option<String>,
    pub biography: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public profile. Never carries the credential hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub role_id: Uuid,
    pub biography: Option<String>,
    pub biography_extend: Option<BiographyExtendDto>,
    pub email: String,
    pub user_status: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProfileDto {
    pub biography: Option<String>,
    pub biography_extend: Option<BiographyExtendDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RangerSummaryDto {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RangerListDto {
    pub rangers: Vec<RangerSummaryDto>,
}
