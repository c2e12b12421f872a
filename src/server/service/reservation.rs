use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{reservation::ReservationRepository, trip::TripRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::AuthContext,
        reservation::{CreateReservationParams, Reservation},
    },
};

const DUPLICATE_RESERVATION: &str = "User already holds a reservation on this trip";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reserves a seat on a trip for the caller.
    ///
    /// Takes the same trip row lock as trip edits and deletes, so a reservation and a
    /// structural change to its trip never interleave.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(AppError::AuthErr(Forbidden))` - `user_id` is not the caller
    /// - `Err(AppError::NotFound)` - Trip or user does not exist
    /// - `Err(AppError::Conflict)` - The user already holds a reservation on the trip
    pub async fn create(
        &self,
        ctx: &AuthContext,
        params: CreateReservationParams,
    ) -> Result<Reservation, AppError> {
        if params.user_id != ctx.user_id {
            return Err(AuthError::Forbidden {
                user_id: ctx.user_id,
                reason: "cannot reserve on behalf of another user".to_string(),
            }
            .into());
        }

        let txn = self.db.begin().await?;

        if TripRepository::new(&txn)
            .find_by_id_for_update(params.trip_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }
        if UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = ReservationRepository::new(&txn);
        if repo
            .find_by_trip_and_user(params.trip_id, params.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(DUPLICATE_RESERVATION.to_string()));
        }

        let reservation = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_RESERVATION))?;

        txn.commit().await?;

        tracing::info!(
            reservation_id = %reservation.id,
            trip_id = %reservation.trip_id,
            "Reservation created"
        );

        Ok(reservation)
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Deletes a reservation by id.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        let removed = ReservationRepository::new(self.db).delete_by_id(id).await?;

        ensure_removed(removed)?;
        tracing::info!(reservation_id = %id, "Reservation deleted");

        Ok(())
    }

    /// Deletes the oldest reservation held on a trip.
    pub async fn delete_by_trip(&self, trip_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let removed = ReservationRepository::new(&txn)
            .delete_first_by_trip(trip_id)
            .await?;
        ensure_removed(removed)?;

        txn.commit().await?;

        tracing::info!(trip_id = %trip_id, "Reservation deleted");

        Ok(())
    }

    /// Deletes the reservation a user holds on a trip.
    pub async fn delete_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let removed = ReservationRepository::new(self.db)
            .delete_by_trip_and_user(trip_id, user_id)
            .await?;

        ensure_removed(removed)?;
        tracing::info!(trip_id = %trip_id, user_id = %user_id, "Reservation deleted");

        Ok(())
    }
}

fn ensure_removed(rows: u64) -> Result<(), AppError> {
    if rows == 0 {
        return Err(AppError::NotFound("Reservation not found".to_string()));
    }
    Ok(())
}
