use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RatingDto {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub ranger_id: Uuid,
    pub calification: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /ratings`. The rater is the caller.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateRatingDto {
    pub ranger_id: Option<String>,
    pub trip_id: Option<String>,
    pub calification: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RateTripResultDto {
    pub rating: RatingDto,
    /// The ranger's aggregate after this write.
    pub ranger_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TripRatingDto {
    pub trip_id: Uuid,
    pub average: f64,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RangerRatingDto {
    pub ranger_id: Uuid,
    pub rating: Option<f64>,
    pub count: u64,
}
