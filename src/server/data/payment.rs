use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::payment::{CreatePaymentParams, Payment, PaymentStatus};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_trip_and_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TripId.eq(trip_id))
            .filter(entity::payment::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Inserts a payment with `Pendiente` status dated now.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            trip_id: ActiveValue::Set(params.trip_id),
            amount: ActiveValue::Set(Some(params.amount)),
            payment_method: ActiveValue::Set(params.payment_method),
            voucher_url: ActiveValue::Set(params.voucher_url),
            status: ActiveValue::Set(PaymentStatus::Pendiente.as_str().to_string()),
            payment_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    /// Overwrites the transaction details of an existing payment and resets it to
    /// `Pendiente` for review.
    pub async fn replace(&self, id: Uuid, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            amount: ActiveValue::Set(Some(params.amount)),
            payment_method: ActiveValue::Set(params.payment_method),
            voucher_url: ActiveValue::Set(params.voucher_url),
            status: ActiveValue::Set(PaymentStatus::Pendiente.as_str().to_string()),
            payment_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    pub async fn update_status(&self, id: Uuid, status: PaymentStatus) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    /// Inserts a row carrying only a status, with no amount, method or voucher.
    pub async fn create_status_only(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        status: PaymentStatus,
    ) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            trip_id: ActiveValue::Set(trip_id),
            amount: ActiveValue::Set(None),
            payment_method: ActiveValue::Set(None),
            voucher_url: ActiveValue::Set(None),
            status: ActiveValue::Set(status.as_str().to_string()),
            payment_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    pub async fn get_by_trip(&self, trip_id: Uuid) -> Result<Vec<Payment>, DbErr> {
        let payments = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TripId.eq(trip_id))
            .order_by_asc(entity::payment::Column::PaymentDate)
            .all(self.db)
            .await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }

    pub async fn delete_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
