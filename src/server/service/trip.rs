use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        activity_trip::ActivityTripRepository, payment::PaymentRepository,
        rating::RatingRepository, reservation::ReservationRepository, trip::TripRepository,
        trip_resource::TripResourceRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthContext, Role},
        trip::{CreateTripParams, ReservationCheck, Trip, TripDeletion, UpdateTripParams},
    },
    service::rating::{lock_ranger, recompute_ranger_rating},
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trip led by an existing ranger.
    ///
    /// # Arguments
    /// - `params` - Trip fields with optional ones already defaulted
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(AppError::BadRequest)` - Schedule or numeric fields invalid, or `lead_ranger`
    ///   is not a Ranger
    /// - `Err(AppError::NotFound)` - `lead_ranger` does not exist
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, AppError> {
        validate_schedule(params.start_date, params.end_date)?;
        validate_amounts(Some(params.participants_number), Some(params.total_cost))?;

        let txn = self.db.begin().await?;

        let Some((_, role)) = UserRepository::new(&txn)
            .find_with_role(params.lead_ranger)
            .await?
        else {
            return Err(AppError::NotFound("Lead ranger not found".to_string()));
        };

        if role.as_ref().map(|r| r.role_name.as_str()) != Some(Role::Ranger.as_str()) {
            return Err(AppError::BadRequest(
                "lead_ranger must be a user with the Ranger role".to_string(),
            ));
        }

        let trip = TripRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(trip_id = %trip.id, lead_ranger = %trip.lead_ranger, "Trip created");

        Ok(trip)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        Ok(TripRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Trip>, AppError> {
        Ok(TripRepository::new(self.db).get_all().await?)
    }

    /// Gets trips led by a ranger.
    pub async fn get_by_ranger(&self, ranger_id: Uuid) -> Result<Vec<Trip>, AppError> {
        Ok(TripRepository::new(self.db)
            .get_by_lead_ranger(ranger_id)
            .await?)
    }

    /// Gets trips a user holds at least one reservation on.
    pub async fn get_by_explorer(&self, user_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trip_ids = ReservationRepository::new(self.db)
            .get_trip_ids_by_user(user_id)
            .await?;

        Ok(TripRepository::new(self.db).get_by_ids(trip_ids).await?)
    }

    /// Edits the allow-listed structural fields of a trip.
    ///
    /// The trip row is locked for the duration of the check so a reservation cannot be
    /// inserted between the reservation count and the update.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip after the edit
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::AuthErr(Forbidden))` - Caller does not lead the trip
    /// - `Err(AppError::Conflict)` - Trip has at least one reservation
    /// - `Err(AppError::BadRequest)` - Blank name, or resulting schedule or numeric fields invalid
    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        params: UpdateTripParams,
    ) -> Result<Trip, AppError> {
        if matches!(&params.trip_name, Some(name) if name.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "trip_name must not be blank".to_string(),
            ));
        }
        validate_amounts(params.participants_number, params.total_cost)?;

        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let trip = trip_repo
            .find_by_id_for_update(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        ensure_lead_ranger(ctx, &trip)?;
        ensure_no_reservations(&ReservationRepository::new(&txn), id, "edited").await?;
        validate_schedule(
            params.start_date.unwrap_or(trip.start_date),
            params.end_date.unwrap_or(trip.end_date),
        )?;

        if params.is_empty() {
            return Ok(trip);
        }

        let trip = trip_repo.update(id, params).await?;

        txn.commit().await?;

        tracing::info!(trip_id = %id, user_id = %ctx.user_id, "Trip edited");

        Ok(trip)
    }

    /// Deletes a trip together with everything that hangs off it.
    ///
    /// Activity and resource links are removed first, then any payment and rating
    /// history, then the trip row, all in one transaction. When ratings are removed the
    /// lead ranger's aggregate is recomputed before commit.
    ///
    /// # Returns
    /// - `Ok(TripDeletion)` - Counts of removed activity and resource links
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::AuthErr(Forbidden))` - Caller does not lead the trip
    /// - `Err(AppError::Conflict)` - Trip has at least one reservation
    pub async fn delete(&self, ctx: &AuthContext, id: Uuid) -> Result<TripDeletion, AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let trip = trip_repo
            .find_by_id_for_update(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        ensure_lead_ranger(ctx, &trip)?;
        ensure_no_reservations(&ReservationRepository::new(&txn), id, "deleted").await?;
        lock_ranger(&txn, trip.lead_ranger).await?;

        let activities_removed = ActivityTripRepository::new(&txn).delete_by_trip(id).await?;
        let resources_removed = TripResourceRepository::new(&txn).delete_by_trip(id).await?;
        PaymentRepository::new(&txn).delete_by_trip(id).await?;
        let ratings_removed = RatingRepository::new(&txn).delete_by_trip(id).await?;

        trip_repo.delete(id).await?;

        if ratings_removed > 0 {
            recompute_ranger_rating(&txn, trip.lead_ranger).await?;
        }

        txn.commit().await?;

        tracing::info!(
            trip_id = %id,
            user_id = %ctx.user_id,
            activities_removed,
            resources_removed,
            "Trip deleted"
        );

        Ok(TripDeletion {
            activities_removed,
            resources_removed,
        })
    }

    /// Overwrites the status label. Not gated by reservations.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip with its new status
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::AuthErr(Forbidden))` - Caller does not lead the trip
    pub async fn set_status(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        status: String,
    ) -> Result<Trip, AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let trip = trip_repo
            .find_by_id_for_update(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        ensure_lead_ranger(ctx, &trip)?;

        let trip = trip_repo.update_status(id, status).await?;

        txn.commit().await?;

        tracing::info!(
            trip_id = %id,
            user_id = %ctx.user_id,
            status = %trip.trip_status,
            "Trip status changed"
        );

        Ok(trip)
    }

    /// Lists the reservations held on a trip.
    ///
    /// # Returns
    /// - `Ok(ReservationCheck)` - Reservations with holder details, possibly empty
    /// - `Err(AppError::NotFound)` - Trip does not exist
    pub async fn check_reservations(&self, id: Uuid) -> Result<ReservationCheck, AppError> {
        if TripRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let reservations = ReservationRepository::new(self.db)
            .get_holders_by_trip(id)
            .await?;

        Ok(ReservationCheck { reservations })
    }
}

fn ensure_lead_ranger(ctx: &AuthContext, trip: &Trip) -> Result<(), AppError> {
    if ctx.user_id != trip.lead_ranger {
        return Err(AuthError::Forbidden {
            user_id: ctx.user_id,
            reason: format!("trip {} is led by another ranger", trip.id),
        }
        .into());
    }

    Ok(())
}

async fn ensure_no_reservations<C: sea_orm::ConnectionTrait>(
    repo: &ReservationRepository<'_, C>,
    trip_id: Uuid,
    action: &str,
) -> Result<(), AppError> {
    let count = repo.count_by_trip(trip_id).await?;

    if count > 0 {
        tracing::debug!(trip_id = %trip_id, count, "Trip change blocked by reservations");
        return Err(AppError::Conflict(format!(
            "Trip has {} reservation(s) and cannot be {}",
            count, action
        )));
    }

    Ok(())
}

fn validate_schedule(start: chrono::NaiveDate, end: chrono::NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }

    Ok(())
}

fn validate_amounts(participants: Option<i32>, total_cost: Option<f64>) -> Result<(), AppError> {
    if matches!(participants, Some(p) if p < 0) {
        return Err(AppError::BadRequest(
            "participants_number must not be negative".to_string(),
        ));
    }
    if matches!(total_cost, Some(c) if !c.is_finite() || c < 0.0) {
        return Err(AppError::BadRequest(
            "total_cost must not be negative".to_string(),
        ));
    }

    Ok(())
}
