//! Resource domain models and parameters.
//!
//! The `description` column holds JSON. It is read and written through the typed
//! [`ResourceDescription`] so malformed payloads are rejected at the boundary.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::resource::{ResourceDescriptionDto, ResourceDto};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ResourceDescription {
    /// Reads the stored JSON column.
    ///
    /// A bare JSON string is accepted as the summary; `null` is an empty description.
    ///
    /// # Returns
    /// - `Ok(ResourceDescription)` - Parsed description
    /// - `Err(DbErr::Custom)` - Stored value does not match the typed shape
    pub fn from_json(value: serde_json::Value) -> Result<Self, DbErr> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::String(summary) => Ok(Self {
                summary: Some(summary),
                ..Default::default()
            }),
            other => serde_json::from_value(other)
                .map_err(|e| DbErr::Custom(format!("Failed to parse resource description: {}", e))),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, DbErr> {
        serde_json::to_value(self)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize resource description: {}", e)))
    }

    /// Rejects negative quantities.
    pub fn validate(&self) -> Result<(), String> {
        match self.quantity {
            Some(q) if q < 0 => Err("description.quantity must not be negative".to_string()),
            _ => Ok(()),
        }
    }

    pub fn from_dto(dto: ResourceDescriptionDto) -> Self {
        Self {
            summary: dto.summary,
            quantity: dto.quantity,
            unit: dto.unit,
            notes: dto.notes,
        }
    }

    pub fn into_dto(self) -> ResourceDescriptionDto {
        ResourceDescriptionDto {
            summary: self.summary,
            quantity: self.quantity,
            unit: self.unit,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub description: ResourceDescription,
    pub cost: f64,
}

impl Resource {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Resource)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored description is not a valid payload
    pub fn from_entity(entity: entity::resource::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: ResourceDescription::from_json(entity.description)?,
            cost: entity.cost,
        })
    }

    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            id: self.id,
            name: self.name,
            description: self.description.into_dto(),
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateResourceParams {
    pub name: String,
    pub description: ResourceDescription,
    pub cost: f64,
}

/// A trip still referencing a resource that was asked to be deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockingTrip {
    pub id: Uuid,
    pub name: String,
}
