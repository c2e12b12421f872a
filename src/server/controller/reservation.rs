use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reservation::{CreateReservationDto, ReservationDto, ReservationListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::Role, reservation::{CreateReservationParams, Reservation}},
        service::reservation::ReservationService,
        state::AppState,
        util::parse::{parse_uuid, require_string, require_uuid},
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Reserve a seat on a trip.
///
/// `trip_id`, `user_id` and `status` are required, and `user_id` must be the caller.
///
/// # Access Control
/// - `Explorer` - Only explorers can reserve
///
/// # Returns
/// - `201 Created` - The reservation
/// - `400 Bad Request` - Missing field or malformed UUID
/// - `403 Forbidden` - Caller is not an Explorer or reserves for someone else
/// - `404 Not Found` - Trip or user does not exist
/// - `409 Conflict` - The user already holds a reservation on the trip
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to reserve", body = ErrorDto),
        (status = 404, description = "Trip or user not found", body = ErrorDto),
        (status = 409, description = "Already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Explorer)?;
    let Json(payload) = payload?;

    let params = CreateReservationParams {
        trip_id: require_uuid("trip_id", payload.trip_id)?,
        user_id: require_uuid("user_id", payload.user_id)?,
        status: require_string("status", payload.status)?,
    };

    let reservation = ReservationService::new(&state.db)
        .create(&ctx, params)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List a user's reservations.
#[utoipa::path(
    get,
    path = "/reservations/user/{user_id}",
    tag = RESERVATION_TAG,
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Reservations held by the user", body = ReservationListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reservations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_uuid("user_id", &user_id)?;

    let reservations = ReservationService::new(&state.db)
        .get_by_user(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReservationListDto {
            reservations: reservations
                .into_iter()
                .map(Reservation::into_dto)
                .collect(),
        }),
    ))
}

/// Cancel a reservation by id.
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = String, Path, description = "Reservation UUID")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).authenticate()?;
    let id = parse_uuid("id", &id)?;

    ReservationService::new(&state.db).delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Reservation deleted"))))
}

/// Cancel the oldest reservation on a trip.
///
/// # Access Control
/// - `Ranger` - Only rangers can cancel reservations by trip
#[utoipa::path(
    delete,
    path = "/reservations/trip/{trip_id}",
    tag = RESERVATION_TAG,
    params(("trip_id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Trip has no reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_trip_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let trip_id = parse_uuid("trip_id", &trip_id)?;

    ReservationService::new(&state.db)
        .delete_by_trip(trip_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Reservation deleted"))))
}

/// Cancel the reservation a user holds on a trip.
#[utoipa::path(
    delete,
    path = "/reservations/trip/{trip_id}/user/{user_id}",
    tag = RESERVATION_TAG,
    params(
        ("trip_id" = String, Path, description = "Trip UUID"),
        ("user_id" = String, Path, description = "User UUID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user_trip_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((trip_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).authenticate()?;
    let trip_id = parse_uuid("trip_id", &trip_id)?;
    let user_id = parse_uuid("user_id", &user_id)?;

    ReservationService::new(&state.db)
        .delete_by_trip_and_user(trip_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Reservation deleted"))))
}
