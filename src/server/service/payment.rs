use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{payment::PaymentRepository, trip::TripRepository, user::UserRepository},
    error::AppError,
    model::payment::{CreatePaymentParams, Payment, UpsertPaymentStatusParams},
};

const DUPLICATE_PAYMENT: &str = "A payment for this trip was recorded concurrently";

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the payment a user makes for a trip.
    ///
    /// A user holds at most one payment per trip. Submitting again replaces the amount,
    /// method and voucher of the existing row and puts it back to `Pendiente`.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The created or replaced payment
    /// - `Err(AppError::BadRequest)` - Amount is not a positive number
    /// - `Err(AppError::NotFound)` - Trip or user does not exist
    /// - `Err(AppError::Conflict)` - A concurrent submission created the row first
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        if !params.amount.is_finite() || params.amount <= 0.0 {
            return Err(AppError::BadRequest(
                "amount must be greater than zero".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        ensure_trip_and_user(&txn, params.trip_id, params.user_id).await?;

        let repo = PaymentRepository::new(&txn);
        let payment = match repo
            .find_by_trip_and_user(params.trip_id, params.user_id)
            .await?
        {
            Some(existing) => repo.replace(existing.id, params).await?,
            None => repo
                .create(params)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_PAYMENT))?,
        };

        txn.commit().await?;

        tracing::info!(
            payment_id = %payment.id,
            trip_id = %payment.trip_id,
            "Payment recorded"
        );

        Ok(payment)
    }

    /// Sets the review status of a user's payment for a trip, creating a status-only
    /// row when none exists yet.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The updated or created payment
    /// - `Err(AppError::NotFound)` - Trip or user does not exist
    /// - `Err(AppError::Conflict)` - A concurrent submission created the row first
    pub async fn upsert_status(
        &self,
        params: UpsertPaymentStatusParams,
    ) -> Result<Payment, AppError> {
        let txn = self.db.begin().await?;

        ensure_trip_and_user(&txn, params.trip_id, params.user_id).await?;

        let repo = PaymentRepository::new(&txn);
        let payment = match repo
            .find_by_trip_and_user(params.trip_id, params.user_id)
            .await?
        {
            Some(existing) => repo.update_status(existing.id, params.status).await?,
            None => repo
                .create_status_only(params.trip_id, params.user_id, params.status)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, DUPLICATE_PAYMENT))?,
        };

        txn.commit().await?;

        tracing::info!(
            payment_id = %payment.id,
            status = %payment.status,
            "Payment status set"
        );

        Ok(payment)
    }

    /// Gets every payment recorded for a trip.
    ///
    /// # Returns
    /// - `Ok(Vec<Payment>)` - Payments, possibly empty
    /// - `Err(AppError::NotFound)` - Trip does not exist
    pub async fn get_by_trip(&self, trip_id: Uuid) -> Result<Vec<Payment>, AppError> {
        if TripRepository::new(self.db).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(PaymentRepository::new(self.db).get_by_trip(trip_id).await?)
    }

    pub async fn get_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .find_by_trip_and_user(trip_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
    }
}

async fn ensure_trip_and_user<C: sea_orm::ConnectionTrait>(
    db: &C,
    trip_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    if TripRepository::new(db).find_by_id(trip_id).await?.is_none() {
        return Err(AppError::NotFound("Trip not found".to_string()));
    }
    if UserRepository::new(db).find_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(())
}
