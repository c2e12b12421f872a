use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        trip::{
            CreateTripDto, DeleteTripDto, ReservationCheckDto, TripDto, TripListDto,
            UpdateTripDto, UpdateTripStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            trip::{CreateTripParams, Trip, UpdateTripParams, DEFAULT_TRIP_STATUS},
        },
        service::trip::TripService,
        state::AppState,
        util::parse::{parse_date, parse_uuid, require_string, require_uuid},
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

/// Create a new trip.
///
/// Creates a trip led by the given ranger. `trip_name`, `lead_ranger`, `start_date` and
/// `end_date` are required; the remaining fields default (`trip_status = "pending"`,
/// `total_cost = 0`, empty strings for text fields).
///
/// # Access Control
/// - `Ranger` - Only rangers can create trips
///
/// # Returns
/// - `201 Created` - The created trip
/// - `400 Bad Request` - Missing field, malformed UUID or date, or invalid values
/// - `401 Unauthorized` - Missing, expired or invalid credential
/// - `403 Forbidden` - Caller is not a Ranger
/// - `404 Not Found` - Lead ranger does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/trips",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Trip created", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Lead ranger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTripDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let params = CreateTripParams {
        trip_name: require_string("trip_name", payload.trip_name)?,
        lead_ranger: require_uuid("lead_ranger", payload.lead_ranger)?,
        start_date: parse_date("start_date", &require_string("start_date", payload.start_date)?)?,
        end_date: parse_date("end_date", &require_string("end_date", payload.end_date)?)?,
        participants_number: payload.participants_number.unwrap_or(0),
        trip_status: payload
            .trip_status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TRIP_STATUS.to_string()),
        estimated_weather_forecast: payload.estimated_weather_forecast.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        total_cost: payload.total_cost.unwrap_or(0.0),
        trip_image_url: payload.trip_image_url.unwrap_or_default(),
    };

    let trip = TripService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

/// List every trip.
#[utoipa::path(
    get,
    path = "/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "All trips", body = TripListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = TripService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(trip_list(trips))))
}

/// Get a trip by id.
///
/// # Returns
/// - `200 OK` - The trip
/// - `400 Bad Request` - Malformed UUID
/// - `404 Not Found` - No trip with that id
#[utoipa::path(
    get,
    path = "/trips/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Trip found", body = TripDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let Some(trip) = TripService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Trip not found".to_string()));
    };

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// List the trips led by a ranger.
#[utoipa::path(
    get,
    path = "/trips/ranger/{user_id}",
    tag = TRIP_TAG,
    params(("user_id" = String, Path, description = "Ranger UUID")),
    responses(
        (status = 200, description = "Trips led by the ranger", body = TripListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips_by_ranger(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_uuid("user_id", &user_id)?;

    let trips = TripService::new(&state.db).get_by_ranger(user_id).await?;

    Ok((StatusCode::OK, Json(trip_list(trips))))
}

/// List the trips a user holds reservations on.
#[utoipa::path(
    get,
    path = "/trips/explorer/{user_id}",
    tag = TRIP_TAG,
    params(("user_id" = String, Path, description = "Explorer UUID")),
    responses(
        (status = 200, description = "Reserved trips", body = TripListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips_by_explorer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_uuid("user_id", &user_id)?;

    let trips = TripService::new(&state.db).get_by_explorer(user_id).await?;

    Ok((StatusCode::OK, Json(trip_list(trips))))
}

/// Edit a trip.
///
/// Only `trip_name`, `start_date`, `end_date`, `participants_number`,
/// `estimated_weather_forecast`, `description`, `total_cost` and `trip_image_url` can be
/// changed; any other body field is ignored. Refused while the trip has reservations.
///
/// # Access Control
/// - `Ranger` - Only the trip's lead ranger can edit
///
/// # Returns
/// - `200 OK` - The trip after the edit
/// - `400 Bad Request` - Malformed UUID or date, or invalid values
/// - `401 Unauthorized` - Missing, expired or invalid credential
/// - `403 Forbidden` - Caller is not a Ranger or does not lead the trip
/// - `404 Not Found` - Trip does not exist
/// - `409 Conflict` - Trip has at least one reservation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/trips/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    request_body = UpdateTripDto,
    responses(
        (status = 200, description = "Trip edited", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the trip's lead ranger", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Trip has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTripDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let id = parse_uuid("id", &id)?;
    let Json(payload) = payload?;

    let params = UpdateTripParams {
        trip_name: payload.trip_name,
        start_date: payload
            .start_date
            .map(|d| parse_date("start_date", &d))
            .transpose()?,
        end_date: payload
            .end_date
            .map(|d| parse_date("end_date", &d))
            .transpose()?,
        participants_number: payload.participants_number,
        estimated_weather_forecast: payload.estimated_weather_forecast,
        description: payload.description,
        total_cost: payload.total_cost,
        trip_image_url: payload.trip_image_url,
    };

    let trip = TripService::new(&state.db).update(&ctx, id, params).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Delete a trip.
///
/// Removes the trip with its activity and resource links in one transaction. Refused
/// while the trip has reservations.
///
/// # Access Control
/// - `Ranger` - Only the trip's lead ranger can delete
///
/// # Returns
/// - `200 OK` - Trip deleted, with the number of links removed
/// - `400 Bad Request` - Malformed UUID
/// - `401 Unauthorized` - Missing, expired or invalid credential
/// - `403 Forbidden` - Caller is not a Ranger or does not lead the trip
/// - `404 Not Found` - Trip does not exist
/// - `409 Conflict` - Trip has at least one reservation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Trip deleted", body = DeleteTripDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the trip's lead ranger", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Trip has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let id = parse_uuid("id", &id)?;

    let deletion = TripService::new(&state.db).delete(&ctx, id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteTripDto {
            message: "Trip deleted successfully".to_string(),
            activities_removed: deletion.activities_removed,
            resources_removed: deletion.resources_removed,
        }),
    ))
}

/// Change a trip's status label.
///
/// Any non-empty value is accepted and reservations do not block the change.
///
/// # Access Control
/// - `Ranger` - Only the trip's lead ranger can change its status
#[utoipa::path(
    put,
    path = "/trips/{id}/status",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    request_body = UpdateTripStatusDto,
    responses(
        (status = 200, description = "Status changed", body = TripDto),
        (status = 400, description = "Missing status or malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the trip's lead ranger", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_trip_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTripStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let id = parse_uuid("id", &id)?;
    let Json(payload) = payload?;

    let status = require_string("status", payload.status)?;

    let trip = TripService::new(&state.db)
        .set_status(&ctx, id, status)
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Report whether a trip has reservations, and who holds them.
///
/// # Access Control
/// - `Ranger` - Only rangers can inspect reservations
#[utoipa::path(
    get,
    path = "/trips/{id}/reservations",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Reservation summary", body = ReservationCheckDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn check_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let id = parse_uuid("id", &id)?;

    let check = TripService::new(&state.db).check_reservations(id).await?;

    Ok((StatusCode::OK, Json(check.into_dto())))
}

fn trip_list(trips: Vec<Trip>) -> TripListDto {
    TripListDto {
        trips: trips.into_iter().map(Trip::into_dto).collect(),
    }
}
