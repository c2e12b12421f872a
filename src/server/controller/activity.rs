use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{ActivityDto, ActivityListDto, CreateActivityDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            activity::{Activity, CreateActivityParams},
            auth::Role,
        },
        service::activity::ActivityService,
        state::AppState,
        util::parse::{parse_uuid, require, require_string, require_uuid},
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Add an activity to the catalog.
///
/// `is_available` and `is_public` default to `true` when omitted.
///
/// # Access Control
/// - `Ranger` - Only rangers manage activities
///
/// # Returns
/// - `201 Created` - The new activity
/// - `400 Bad Request` - Missing field, malformed UUID, or inconsistent values
/// - `404 Not Found` - Category or location does not exist
#[utoipa::path(
    post,
    path = "/activities",
    tag = ACTIVITY_TAG,
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Activity created", body = ActivityDto),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Category or location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let params = CreateActivityParams {
        category_id: require_uuid("category_id", payload.category_id)?,
        location_id: require_uuid("location_id", payload.location_id)?,
        name: require_string("name", payload.name)?,
        description: payload.description,
        duration: require("duration", payload.duration)?,
        difficulty: payload.difficulty,
        min_participants: require("min_participants", payload.min_participants)?,
        max_participants: require("max_participants", payload.max_participants)?,
        is_available: payload.is_available.unwrap_or(true),
        is_public: payload.is_public.unwrap_or(true),
        cost: require("cost", payload.cost)?,
        activity_image_url: payload.activity_image_url,
    };

    let activity = ActivityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Every activity", body = ActivityListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ActivityListDto {
            activities: activities.into_iter().map(Activity::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(("id" = String, Path, description = "Activity UUID")),
    responses(
        (status = 200, description = "The activity", body = ActivityDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let activity = ActivityService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}
