//! Rating (calification) domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::rating::{RangerRatingDto, RatingDto, TripRatingDto};

pub const MIN_CALIFICATION: i32 = 1;
pub const MAX_CALIFICATION: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub ranger_id: Uuid,
    pub calification: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn from_entity(entity: entity::ranger_calification::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            user_id: entity.user_id,
            ranger_id: entity.ranger_id,
            calification: entity.calification,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            trip_id: self.trip_id,
            user_id: self.user_id,
            ranger_id: self.ranger_id,
            calification: self.calification,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RateTripParams {
    pub ranger_id: Uuid,
    pub trip_id: Uuid,
    pub calification: i32,
    pub comment: Option<String>,
}

/// Result of a rating write: the stored row and the ranger's recomputed aggregate.
#[derive(Debug, Clone)]
pub struct RateTripOutcome {
    pub rating: Rating,
    pub ranger_rating: Option<f64>,
}

/// Aggregate over all ratings for one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRating {
    pub trip_id: Uuid,
    /// Mean rounded to one decimal, `0.0` when there are no ratings.
    pub average: f64,
    pub count: u64,
}

impl TripRating {
    /// Builds the aggregate from raw scores.
    pub fn from_scores(trip_id: Uuid, scores: &[i32]) -> Self {
        let average = mean(scores)
            .map(|avg| (avg * 10.0).round() / 10.0)
            .unwrap_or(0.0);

        Self {
            trip_id,
            average,
            count: scores.len() as u64,
        }
    }

    pub fn into_dto(self) -> TripRatingDto {
        TripRatingDto {
            trip_id: self.trip_id,
            average: self.average,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangerRating {
    pub ranger_id: Uuid,
    pub rating: Option<f64>,
    pub count: u64,
}

impl RangerRating {
    pub fn into_dto(self) -> RangerRatingDto {
        RangerRatingDto {
            ranger_id: self.ranger_id,
            rating: self.rating,
            count: self.count,
        }
    }
}

/// Arithmetic mean of the scores, `None` for an empty slice.
pub fn mean(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    Some(sum as f64 / scores.len() as f64)
}
