use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{RangerListDto, RegisterUserDto, UpdateProfileDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{
            BiographyExtend, RangerSummary, RegisterUserParams, UpdateProfileParams,
        },
        service::user::UserService,
        state::AppState,
        util::parse::{parse_uuid, require_string, require_uuid},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// The password is stored as a digest and never returned.
///
/// # Returns
/// - `201 Created` - The new user's profile
/// - `400 Bad Request` - Missing field, malformed role UUID or unknown role
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    post,
    path = "/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserProfileDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = RegisterUserParams {
        username: require_string("username", payload.username)?,
        first_name: require_string("first_name", payload.first_name)?,
        last_name: require_string("last_name", payload.last_name)?,
        nationality: payload.nationality,
        rut: payload.rut,
        passport_number: payload.passport_number,
        role_id: require_uuid("role_id", payload.role_id)?,
        biography: payload.biography,
        email: require_string("email", payload.email)?,
        password: require_string("password", payload.password)?,
    };

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List active rangers with their aggregate rating.
#[utoipa::path(
    get,
    path = "/rangers",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Active rangers", body = RangerListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rangers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rangers = UserService::new(&state.db).get_rangers().await?;

    Ok((
        StatusCode::OK,
        Json(RangerListDto {
            rangers: rangers.into_iter().map(RangerSummary::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User profile", body = UserProfileDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid("id", &id)?;

    let user = UserService::new(&state.db)
        .get_profile(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's biography.
///
/// Fields of `biography_extend` that are supplied replace the stored ones; the rest
/// are kept.
///
/// # Access Control
/// - Authenticated - Users may only edit their own profile
#[utoipa::path(
    patch,
    path = "/users/{id}/profile",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User UUID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Editing another user's profile", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).authenticate()?;
    let id = parse_uuid("id", &id)?;
    let Json(payload) = payload?;

    let params = UpdateProfileParams {
        biography: payload.biography,
        biography_extend: payload.biography_extend.map(BiographyExtend::from_dto),
    };

    let user = UserService::new(&state.db)
        .update_profile(&ctx, id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
