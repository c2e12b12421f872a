use super::*;
use crate::server::{model::rating::RateTripParams, service::rating::RatingService};
use uuid::Uuid;

mod get_trip_rating;
mod rate;

fn score(ranger_id: Uuid, trip_id: Uuid, calification: i32) -> RateTripParams {
    RateTripParams {
        ranger_id,
        trip_id,
        calification,
        comment: None,
    }
}

async fn stored_rating(
    db: &sea_orm::DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<f64>, DbErr> {
    Ok(entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .and_then(|user| user.rating))
}
