use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        rating::RatingRepository, reservation::ReservationRepository, trip::TripRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthContext, Role},
        rating::{
            mean, RangerRating, RateTripOutcome, RateTripParams, TripRating, MAX_CALIFICATION,
            MIN_CALIFICATION,
        },
    },
};

const DUPLICATE_RATING: &str = "A rating for this trip was recorded concurrently";

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the caller's rating of a trip and recomputes the lead ranger's aggregate.
    ///
    /// One rating exists per (user, trip): a second call updates the first in place.
    /// The write and the recomputation commit together.
    ///
    /// # Arguments
    /// - `ctx` - The rater
    /// - `params` - Ranger, trip, score and optional comment
    ///
    /// # Returns
    /// - `Ok(RateTripOutcome)` - Stored rating and the ranger's new aggregate
    /// - `Err(AppError::BadRequest)` - Score outside 1..=5, or `ranger_id` does not lead the trip
    /// - `Err(AppError::NotFound)` - Trip or rater does not exist
    /// - `Err(AppError::AuthErr(Forbidden))` - Rater is not an Explorer or holds no
    ///   reservation on the trip
    /// - `Err(AppError::Conflict)` - A concurrent submission created the rating first
    pub async fn rate(
        &self,
        ctx: &AuthContext,
        params: RateTripParams,
    ) -> Result<RateTripOutcome, AppError> {
        if !(MIN_CALIFICATION..=MAX_CALIFICATION).contains(&params.calification) {
            return Err(AppError::BadRequest(format!(
                "calification must be between {} and {}",
                MIN_CALIFICATION, MAX_CALIFICATION
            )));
        }

        let txn = self.db.begin().await?;

        let trip = TripRepository::new(&txn)
            .find_by_id(params.trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if trip.lead_ranger != params.ranger_id {
            return Err(AppError::BadRequest(
                "ranger_id does not lead this trip".to_string(),
            ));
        }

        lock_ranger(&txn, trip.lead_ranger).await?;

        let (_, role) = UserRepository::new(&txn)
            .find_with_role(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if role.as_ref().map(|r| r.role_name.as_str()) != Some(Role::Explorer.as_str()) {
            return Err(AuthError::Forbidden {
                user_id: ctx.user_id,
                reason: "only explorers can rate trips".to_string(),
            }
            .into());
        }

        let reservation = ReservationRepository::new(&txn)
            .find_by_trip_and_user(trip.id, ctx.user_id)
            .await?;
        if reservation.is_none() {
            return Err(AuthError::Forbidden {
                user_id: ctx.user_id,
                reason: format!("holds no reservation on trip {}", trip.id),
            }
            .into());
        }

        let rating_repo = RatingRepository::new(&txn);
        let rating = match rating_repo
            .find_by_trip_and_user(trip.id, ctx.user_id)
            .await?
        {
            Some(existing) => {
                rating_repo
                    .update(existing.id, params.calification, params.comment)
                    .await?
            }
            None => rating_repo
                .create(ctx.user_id, params)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_RATING))?,
        };

        let ranger_rating = recompute_ranger_rating(&txn, trip.lead_ranger).await?;

        txn.commit().await?;

        tracing::info!(
            trip_id = %trip.id,
            ranger_id = %trip.lead_ranger,
            ranger_rating = ?ranger_rating,
            "Ranger rating recomputed"
        );

        Ok(RateTripOutcome {
            rating,
            ranger_rating,
        })
    }

    /// Aggregates the ratings on one trip.
    ///
    /// # Returns
    /// - `Ok(TripRating)` - Average rounded to one decimal and the rating count
    /// - `Err(AppError::NotFound)` - Trip does not exist
    pub async fn get_trip_rating(&self, trip_id: Uuid) -> Result<TripRating, AppError> {
        if TripRepository::new(self.db)
            .find_by_id(trip_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let scores = RatingRepository::new(self.db)
            .get_scores_by_trips(vec![trip_id])
            .await?;

        Ok(TripRating::from_scores(trip_id, &scores))
    }

    /// Reads a ranger's stored aggregate along with the number of ratings behind it.
    pub async fn get_ranger_rating(&self, ranger_id: Uuid) -> Result<RangerRating, AppError> {
        let ranger = UserRepository::new(self.db)
            .find_by_id(ranger_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ranger not found".to_string()))?;

        let trip_ids = TripRepository::new(self.db)
            .get_ids_by_lead_ranger(ranger_id)
            .await?;
        let scores = RatingRepository::new(self.db)
            .get_scores_by_trips(trip_ids)
            .await?;

        Ok(RangerRating {
            ranger_id,
            rating: ranger.rating,
            count: scores.len() as u64,
        })
    }
}

/// Takes the ranger's row lock ahead of any rating write on their trips.
///
/// Concurrent writers for the same ranger queue here, so each recomputation reads the
/// scores committed by the writer before it.
pub(crate) async fn lock_ranger<C: ConnectionTrait>(
    db: &C,
    ranger_id: Uuid,
) -> Result<(), AppError> {
    UserRepository::new(db)
        .find_by_id_for_update(ranger_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ranger not found".to_string()))?;

    Ok(())
}

/// Rewrites `users.rating` for a ranger as the mean calification over every rating on
/// trips they lead. `None` when no such rating exists.
///
/// Callers pass their open transaction, already holding [`lock_ranger`], so the
/// aggregate commits with the write that triggered it.
pub(crate) async fn recompute_ranger_rating<C: ConnectionTrait>(
    db: &C,
    ranger_id: Uuid,
) -> Result<Option<f64>, DbErr> {
    let trip_ids = TripRepository::new(db)
        .get_ids_by_lead_ranger(ranger_id)
        .await?;
    let scores = RatingRepository::new(db)
        .get_scores_by_trips(trip_ids)
        .await?;

    let rating = mean(&scores);

    UserRepository::new(db).update_rating(ranger_id, rating).await?;

    Ok(rating)
}
