use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        certification::{CertificationDto, CertificationListDto, CreateCertificationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            certification::{Certification, CreateCertificationParams},
        },
        service::certification::CertificationService,
        state::AppState,
        util::parse::{parse_date, parse_uuid, require_string},
    },
};

/// Tag for grouping certification endpoints in OpenAPI documentation
pub static CERTIFICATION_TAG: &str = "certification";

/// Record a certification held by the calling ranger.
///
/// # Access Control
/// - `Ranger` - Rangers may only add certifications to their own profile
///
/// # Returns
/// - `201 Created` - The stored certification
/// - `400 Bad Request` - Missing name, malformed date, or expiry before issue date
/// - `403 Forbidden` - Caller is not a Ranger or targets another user
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    post,
    path = "/users/{id}/certifications",
    tag = CERTIFICATION_TAG,
    params(("id" = String, Path, description = "User UUID")),
    request_body = CreateCertificationDto,
    responses(
        (status = 201, description = "Certification stored", body = CertificationDto),
        (status = 400, description = "Invalid certification data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_certification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<CreateCertificationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let user_id = parse_uuid("id", &id)?;
    let Json(payload) = payload?;

    let params = CreateCertificationParams {
        user_id,
        name: require_string("name", payload.name)?,
        issuing_body: payload.issuing_body,
        issued_at: optional_date("issued_at", payload.issued_at)?,
        expires_at: optional_date("expires_at", payload.expires_at)?,
    };

    let certification = CertificationService::new(&state.db)
        .create(&ctx, params)
        .await?;

    Ok((StatusCode::CREATED, Json(certification.into_dto())))
}

#[utoipa::path(
    get,
    path = "/users/{id}/certifications",
    tag = CERTIFICATION_TAG,
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "The user's certifications", body = CertificationListDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certifications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_uuid("id", &id)?;

    let certifications = CertificationService::new(&state.db)
        .get_by_user(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CertificationListDto {
            certifications: certifications
                .into_iter()
                .map(Certification::into_dto)
                .collect(),
        }),
    ))
}

fn optional_date(
    field: &str,
    value: Option<String>,
) -> Result<Option<chrono::NaiveDate>, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_date(field, &v))
        .transpose()
}
