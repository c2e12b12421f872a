use super::*;
use crate::server::{
    model::payment::{CreatePaymentParams, PaymentStatus, UpsertPaymentStatusParams},
    service::payment::PaymentService,
};
use uuid::Uuid;

mod create;
mod upsert_status;

fn payment(trip_id: Uuid, user_id: Uuid, amount: f64) -> CreatePaymentParams {
    CreatePaymentParams {
        trip_id,
        user_id,
        amount,
        payment_method: Some("transfer".to_string()),
        voucher_url: Some("https://vouchers.test/1.pdf".to_string()),
    }
}
