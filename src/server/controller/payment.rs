use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto, PaymentListDto, UpdatePaymentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            payment::{CreatePaymentParams, Payment, PaymentStatus, UpsertPaymentStatusParams},
        },
        service::payment::PaymentService,
        state::AppState,
        util::parse::{parse_uuid, require, require_string, require_uuid},
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record the caller's payment for a trip.
///
/// Replaces any earlier payment the caller made for the same trip and resets its review
/// status to `Pendiente`.
///
/// # Access Control
/// - `Explorer` - Payments are always recorded for the caller
///
/// # Returns
/// - `201 Created` - The stored payment
/// - `400 Bad Request` - Missing or non-positive amount, or malformed UUID
/// - `404 Not Found` - Trip does not exist
#[utoipa::path(
    post,
    path = "/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Invalid payment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an Explorer", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePaymentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Explorer)?;
    let Json(payload) = payload?;

    let params = CreatePaymentParams {
        trip_id: require_uuid("trip_id", payload.trip_id)?,
        user_id: ctx.user_id,
        amount: require("amount", payload.amount)?,
        payment_method: payload.payment_method,
        voucher_url: payload.voucher_url,
    };

    let payment = PaymentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Set the review status of a user's payment.
///
/// # Access Control
/// - `Ranger` - Only rangers review payments
///
/// # Returns
/// - `200 OK` - The payment after the update
/// - `400 Bad Request` - Unknown status or malformed UUID
/// - `404 Not Found` - Trip or user does not exist
#[utoipa::path(
    put,
    path = "/payments/status",
    tag = PAYMENT_TAG,
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = PaymentDto),
        (status = 400, description = "Invalid status data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Trip or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdatePaymentStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let trip_id = require_uuid("trip_id", payload.trip_id)?;
    let user_id = require_uuid("user_id", payload.user_id)?;
    let status = require_string("status", payload.status)?;
    let status = PaymentStatus::parse(&status).ok_or_else(|| {
        AppError::BadRequest(
            "status must be one of Pendiente, Confirmado, Rechazado".to_string(),
        )
    })?;

    let payment = PaymentService::new(&state.db)
        .upsert_status(UpsertPaymentStatusParams {
            trip_id,
            user_id,
            status,
        })
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// List every payment recorded for a trip.
#[utoipa::path(
    get,
    path = "/payments/trip/{trip_id}",
    tag = PAYMENT_TAG,
    params(("trip_id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Payments for the trip", body = PaymentListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_payments(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_uuid("trip_id", &trip_id)?;

    let payments = PaymentService::new(&state.db).get_by_trip(trip_id).await?;

    Ok((
        StatusCode::OK,
        Json(PaymentListDto {
            payments: payments.into_iter().map(Payment::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/payments/trip/{trip_id}/user/{user_id}",
    tag = PAYMENT_TAG,
    params(
        ("trip_id" = String, Path, description = "Trip UUID"),
        ("user_id" = String, Path, description = "User UUID")
    ),
    responses(
        (status = 200, description = "The user's payment for the trip", body = PaymentDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_trip_payment(
    State(state): State<AppState>,
    Path((trip_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_uuid("trip_id", &trip_id)?;
    let user_id = parse_uuid("user_id", &user_id)?;

    let payment = PaymentService::new(&state.db)
        .get_by_trip_and_user(trip_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
