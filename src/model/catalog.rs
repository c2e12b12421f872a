use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityCategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ActivityCategoryListDto {
    pub categories: Vec<ActivityCategoryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LocationDto {
    pub id: Uuid,
    pub place_name: String,
    pub country: String,
    pub province: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LocationListDto {
    pub locations: Vec<LocationDto>,
}

/// Exact-match filters for `GET /locations`.
#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
pub struct LocationQuery {
    pub country: Option<String>,
    pub province: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoleDto {
    pub id: Uuid,
    pub role_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RoleListDto {
    pub roles: Vec<RoleDto>,
}
