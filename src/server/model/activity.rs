//! Activity domain models and parameters.

use uuid::Uuid;

use crate::model::activity::ActivityDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: Uuid,
    pub category_id: Uuid,
    pub location_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration: f64,
    pub difficulty: Option<String>,
    pub min_participants: i32,
    pub max_participants: i32,
    pub is_available: bool,
    pub is_public: bool,
    pub cost: f64,
    pub activity_image_url: Option<String>,
}

impl Activity {
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            location_id: entity.location_id,
            name: entity.name,
            description: entity.description,
            duration: entity.duration,
            difficulty: entity.difficulty,
            min_participants: entity.min_participants,
            max_participants: entity.max_participants,
            is_available: entity.is_available,
            is_public: entity.is_public,
            cost: entity.cost,
            activity_image_url: entity.activity_image_url,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            category_id: self.category_id,
            location_id: self.location_id,
            name: self.name,
            description: self.description,
            duration: self.duration,
            difficulty: self.difficulty,
            min_participants: self.min_participants,
            max_participants: self.max_participants,
            is_available: self.is_available,
            is_public: self.is_public,
            cost: self.cost,
            activity_image_url: self.activity_image_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateActivityParams {
    pub category_id: Uuid,
    pub location_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration: f64,
    pub difficulty: Option<String>,
    pub min_participants: i32,
    pub max_participants: i32,
    pub is_available: bool,
    pub is_public: bool,
    pub cost: f64,
    pub activity_image_url: Option<String>,
}

impl CreateActivityParams {
    /// Checks the numeric fields.
    ///
    /// # Returns
    /// - `Ok(())` - Duration is positive, cost is non-negative and `1 <= min <= max`
    /// - `Err(String)` - Message describing the first violated bound
    pub fn validate(&self) -> Result<(), String> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err("duration must be a positive number".to_string());
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err("cost must not be negative".to_string());
        }
        if self.min_participants < 1 {
            return Err("min_participants must be at least 1".to_string());
        }
        if self.min_participants > self.max_participants {
            return Err("min_participants must not exceed max_participants".to_string());
        }
        Ok(())
    }
}
