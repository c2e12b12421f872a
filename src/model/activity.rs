use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDto {
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

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ActivityListDto {
    pub activities: Vec<ActivityDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateActivityDto {
    pub category_id: Option<String>,
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<f64>,
    pub difficulty: Option<String>,
    pub min_participants: Option<i32>,
    pub max_participants: Option<i32>,
    pub is_available: Option<bool>,
    pub is_public: Option<bool>,
    pub cost: Option<f64>,
    pub activity_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityTripDto {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub trip_id: Uuid,
}

/// Body of `POST /activity-trips` and `DELETE /activity-trips`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ActivityTripPairDto {
    pub trip_id: Option<String>,
    pub activity_id: Option<String>,
}
