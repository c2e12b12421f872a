use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trip_id: Uuid,
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub voucher_url: Option<String>,
    /// One of `Pendiente`, `Confirmado` or `Rechazado`.
    pub status: String,
    pub payment_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaymentListDto {
    pub payments: Vec<PaymentDto>,
}

/// Body of `POST /payments`. The paying user is the caller.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreatePaymentDto {
    pub trip_id: Option<String>,
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub voucher_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdatePaymentStatusDto {
    pub trip_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<String>,
}
