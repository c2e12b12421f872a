//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::{BiographyExtendDto, RangerSummaryDto, UserProfileDto};

/// Typed contents of the `biography_extend` JSON column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BiographyExtend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
}

impl BiographyExtend {
    /// Overlays every field present in `update` onto `self`.
    pub fn merge(mut self, update: BiographyExtend) -> Self {
        if update.languages.is_some() {
            self.languages = update.languages;
        }
        if update.experience_years.is_some() {
            self.experience_years = update.experience_years;
        }
        if update.specialties.is_some() {
            self.specialties = update.specialties;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.experience_years {
            Some(years) if years < 0 => {
                Err("biography_extend.experience_years must not be negative".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, DbErr> {
        serde_json::from_value(value)
            .map_err(|e| DbErr::Custom(format!("Failed to parse biography_extend: {}", e)))
    }

    pub fn to_json(&self) -> Result<serde_json::Value, DbErr> {
        serde_json::to_value(self)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize biography_extend: {}", e)))
    }

    pub fn from_dto(dto: BiographyExtendDto) -> Self {
        Self {
            languages: dto.languages,
            experience_years: dto.experience_years,
            specialties: dto.specialties,
        }
    }

    pub fn into_dto(self) -> BiographyExtendDto {
        BiographyExtendDto {
            languages: self.languages,
            experience_years: self.experience_years,
            specialties: self.specialties,
        }
    }
}

/// Public user profile; the credential hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub role_id: Uuid,
    pub biography: Option<String>,
    pub biography_extend: Option<BiographyExtend>,
    pub email: String,
    pub user_status: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored `biography_extend` does not match the typed shape
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let biography_extend = entity
            .biography_extend
            .filter(|value| !value.is_null())
            .map(BiographyExtend::from_json)
            .transpose()?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            nationality: entity.nationality,
            role_id: entity.role_id,
            biography: entity.biography,
            biography_extend,
            email: entity.email,
            user_status: entity.user_status,
            rating: entity.rating,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            nationality: self.nationality,
            role_id: self.role_id,
            biography: self.biography,
            biography_extend: self.biography_extend.map(BiographyExtend::into_dto),
            email: self.email,
            user_status: self.user_status,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

/// Listing entry for an active ranger.
#[derive(Debug, Clone, PartialEq)]
pub struct RangerSummary {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub rating: Option<f64>,
}

impl RangerSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: format!("{} {}", entity.first_name, entity.last_name),
            username: entity.username,
            rating: entity.rating,
        }
    }

    pub fn into_dto(self) -> RangerSummaryDto {
        RangerSummaryDto {
            id: self.id,
            full_name: self.full_name,
            username: self.username,
            rating: self.rating,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub rut: Option<String>,
    pub passport_number: Option<String>,
    pub role_id: Uuid,
    pub biography: Option<String>,
    pub email: String,
    pub password: String,
}

/// Insert-ready user row; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub rut: Option<String>,
    pub passport_number: Option<String>,
    pub role_id: Uuid,
    pub biography: Option<String>,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub biography: Option<String>,
    pub biography_extend: Option<BiographyExtend>,
}
