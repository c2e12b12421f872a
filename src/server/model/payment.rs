//! Payment domain models and parameters.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::model::payment::PaymentDto;

/// Payment workflow status. Stored as its literal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pendiente,
    Confirmado,
    Rechazado,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pendiente => "Pendiente",
            PaymentStatus::Confirmado => "Confirmado",
            PaymentStatus::Rechazado => "Rechazado",
        }
    }

    /// Parses one of the three literal status names. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pendiente" => Some(PaymentStatus::Pendiente),
            "Confirmado" => Some(PaymentStatus::Confirmado),
            "Rechazado" => Some(PaymentStatus::Rechazado),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trip_id: Uuid,
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub voucher_url: Option<String>,
    pub status: String,
    pub payment_date: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            trip_id: entity.trip_id,
            amount: entity.amount,
            payment_method: entity.payment_method,
            voucher_url: entity.voucher_url,
            status: entity.status,
            payment_date: entity.payment_date,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            user_id: self.user_id,
            trip_id: self.trip_id,
            amount: self.amount,
            payment_method: self.payment_method,
            voucher_url: self.voucher_url,
            status: self.status,
            payment_date: self.payment_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub payment_method: Option<String>,
    pub voucher_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpsertPaymentStatusParams {
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub status: PaymentStatus,
}
