//! Read-mostly catalog entries: categories, locations and roles.

use uuid::Uuid;

use crate::model::catalog::{ActivityCategoryDto, LocationDto, RoleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl ActivityCategory {
    pub fn from_entity(entity: entity::activity_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> ActivityCategoryDto {
        ActivityCategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Uuid,
    pub place_name: String,
    pub country: String,
    pub province: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            place_name: entity.place_name,
            country: entity.country,
            province: entity.province,
            latitude: entity.latitude,
            longitude: entity.longitude,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            place_name: self.place_name,
            country: self.country,
            province: self.province,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Exact-match location filter. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    pub country: Option<String>,
    pub province: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRole {
    pub id: Uuid,
    pub role_name: String,
}

impl UserRole {
    pub fn from_entity(entity: entity::user_role::Model) -> Self {
        Self {
            id: entity.id,
            role_name: entity.role_name,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            role_name: self.role_name,
        }
    }
}
