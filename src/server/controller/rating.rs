use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rating::{CreateRatingDto, RangerRatingDto, RateTripResultDto, TripRatingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::Role, rating::RateTripParams},
        service::rating::RatingService,
        state::AppState,
        util::parse::{parse_uuid, require, require_uuid},
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

/// Rate the ranger who led a trip.
///
/// A second rating by the same explorer for the same trip replaces the first. The
/// ranger's aggregate rating is recomputed before the response is sent.
///
/// # Access Control
/// - `Explorer` - The caller must also hold a reservation on the trip
///
/// # Returns
/// - `201 Created` - The stored rating and the ranger's new aggregate
/// - `400 Bad Request` - Score outside 1..=5, or `ranger_id` does not lead the trip
/// - `403 Forbidden` - Caller is not an Explorer or never reserved the trip
/// - `404 Not Found` - Trip does not exist
#[utoipa::path(
    post,
    path = "/ratings",
    tag = RATING_TAG,
    request_body = CreateRatingDto,
    responses(
        (status = 201, description = "Rating stored", body = RateTripResultDto),
        (status = 400, description = "Invalid rating data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to rate this trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rate_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateRatingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Explorer)?;
    let Json(payload) = payload?;

    let params = RateTripParams {
        ranger_id: require_uuid("ranger_id", payload.ranger_id)?,
        trip_id: require_uuid("trip_id", payload.trip_id)?,
        calification: require("calification", payload.calification)?,
        comment: payload.comment,
    };

    let outcome = RatingService::new(&state.db).rate(&ctx, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(RateTripResultDto {
            rating: outcome.rating.into_dto(),
            ranger_rating: outcome.ranger_rating,
        }),
    ))
}

/// Average score a trip has received, rounded to one decimal.
#[utoipa::path(
    get,
    path = "/trips/{id}/rating",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Trip rating", body = TripRatingDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let rating = RatingService::new(&state.db).get_trip_rating(id).await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}

#[utoipa::path(
    get,
    path = "/rangers/{id}/rating",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Ranger UUID")),
    responses(
        (status = 200, description = "Ranger rating", body = RangerRatingDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Ranger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ranger_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let rating = RatingService::new(&state.db).get_ranger_rating(id).await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}
