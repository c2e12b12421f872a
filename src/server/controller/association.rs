use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{ActivityListDto, ActivityTripDto, ActivityTripPairDto},
        api::{ErrorDto, MessageDto},
        resource::{ResourceListDto, TripResourceDto, TripResourcePairDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{activity::Activity, auth::Role, resource::Resource},
        service::association::AssociationService,
        state::AppState,
        util::parse::{parse_uuid, require_uuid},
    },
};

/// Tag for grouping trip association endpoints in OpenAPI documentation
pub static ASSOCIATION_TAG: &str = "association";

/// Link an activity to a trip.
///
/// # Access Control
/// - `Ranger` - Only rangers can change a trip's activities
///
/// # Returns
/// - `201 Created` - The new link
/// - `400 Bad Request` - Missing or malformed UUID
/// - `404 Not Found` - Activity or trip does not exist
/// - `409 Conflict` - The pair is already linked
#[utoipa::path(
    post,
    path = "/activity-trips",
    tag = ASSOCIATION_TAG,
    request_body = ActivityTripPairDto,
    responses(
        (status = 201, description = "Activity linked", body = ActivityTripDto),
        (status = 400, description = "Invalid identifiers", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Activity or trip not found", body = ErrorDto),
        (status = 409, description = "Already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn associate_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ActivityTripPairDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let trip_id = require_uuid("trip_id", payload.trip_id)?;
    let activity_id = require_uuid("activity_id", payload.activity_id)?;

    let link = AssociationService::new(&state.db)
        .associate_activity(trip_id, activity_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

/// Remove the link between an activity and a trip.
///
/// # Access Control
/// - `Ranger` - Only rangers can change a trip's activities
#[utoipa::path(
    delete,
    path = "/activity-trips",
    tag = ASSOCIATION_TAG,
    request_body = ActivityTripPairDto,
    responses(
        (status = 200, description = "Activity unlinked", body = MessageDto),
        (status = 400, description = "Invalid identifiers", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn disassociate_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ActivityTripPairDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let trip_id = require_uuid("trip_id", payload.trip_id)?;
    let activity_id = require_uuid("activity_id", payload.activity_id)?;

    AssociationService::new(&state.db)
        .disassociate_activity(trip_id, activity_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Activity removed from trip")),
    ))
}

/// Link a resource to a trip.
///
/// # Access Control
/// - `Ranger` - Only rangers can change a trip's resources
///
/// # Returns
/// - `201 Created` - The new link
/// - `400 Bad Request` - Missing or malformed UUID
/// - `404 Not Found` - Trip or resource does not exist
/// - `409 Conflict` - The pair is already linked
#[utoipa::path(
    post,
    path = "/trip-resources",
    tag = ASSOCIATION_TAG,
    request_body = TripResourcePairDto,
    responses(
        (status = 201, description = "Resource linked", body = TripResourceDto),
        (status = 400, description = "Invalid identifiers", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Trip or resource not found", body = ErrorDto),
        (status = 409, description = "Already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn associate_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TripResourcePairDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let trip_id = require_uuid("trip_id", payload.trip_id)?;
    let resource_id = require_uuid("resource_id", payload.resource_id)?;

    let link = AssociationService::new(&state.db)
        .associate_resource(trip_id, resource_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/trip-resources",
    tag = ASSOCIATION_TAG,
    request_body = TripResourcePairDto,
    responses(
        (status = 200, description = "Resource unlinked", body = MessageDto),
        (status = 400, description = "Invalid identifiers", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn disassociate_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TripResourcePairDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let trip_id = require_uuid("trip_id", payload.trip_id)?;
    let resource_id = require_uuid("resource_id", payload.resource_id)?;

    AssociationService::new(&state.db)
        .disassociate_resource(trip_id, resource_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Resource removed from trip")),
    ))
}

/// List the activities linked to a trip.
#[utoipa::path(
    get,
    path = "/trips/{id}/activities",
    tag = ASSOCIATION_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Linked activities", body = ActivityListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_activities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let activities = AssociationService::new(&state.db)
        .get_trip_activities(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ActivityListDto {
            activities: activities.into_iter().map(Activity::into_dto).collect(),
        }),
    ))
}

/// List the resources linked to a trip.
#[utoipa::path(
    get,
    path = "/trips/{id}/resources",
    tag = ASSOCIATION_TAG,
    params(("id" = String, Path, description = "Trip UUID")),
    responses(
        (status = 200, description = "Linked resources", body = ResourceListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_resources(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let resources = AssociationService::new(&state.db)
        .get_trip_resources(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResourceListDto {
            resources: resources.into_iter().map(Resource::into_dto).collect(),
        }),
    ))
}
