use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        resource::{CreateResourceDto, ResourceDto, ResourceInUseDto, ResourceListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Role,
            resource::{CreateResourceParams, Resource, ResourceDescription},
        },
        service::resource::ResourceService,
        state::AppState,
        util::parse::{parse_uuid, require, require_string},
    },
};

/// Tag for grouping resource endpoints in OpenAPI documentation
pub static RESOURCE_TAG: &str = "resource";

/// Add an item to the resource catalog.
///
/// # Access Control
/// - `Ranger` - Only rangers manage resources
///
/// # Returns
/// - `201 Created` - The new resource
/// - `400 Bad Request` - Missing name or cost, negative cost, or invalid description
/// - `409 Conflict` - A resource with this name already exists
#[utoipa::path(
    post,
    path = "/resources",
    tag = RESOURCE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Resource created", body = ResourceDto),
        (status = 400, description = "Invalid resource data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 409, description = "Duplicate resource name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let Json(payload) = payload?;

    let params = CreateResourceParams {
        name: require_string("name", payload.name)?,
        description: payload
            .description
            .map(ResourceDescription::from_dto)
            .unwrap_or_default(),
        cost: require("cost", payload.cost)?,
    };

    let resource = ResourceService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(resource.into_dto())))
}

#[utoipa::path(
    get,
    path = "/resources",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "Every resource", body = ResourceListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resources(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resources = ResourceService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ResourceListDto {
            resources: resources.into_iter().map(Resource::into_dto).collect(),
        }),
    ))
}

/// Remove a resource from the catalog.
///
/// Refused while any trip still lists the resource; the response names those trips.
///
/// # Access Control
/// - `Ranger` - Only rangers manage resources
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = RESOURCE_TAG,
    params(("id" = String, Path, description = "Resource UUID")),
    responses(
        (status = 200, description = "Resource deleted", body = MessageDto),
        (status = 400, description = "Malformed UUID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a Ranger", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 409, description = "Resource still used by trips", body = ResourceInUseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(Role::Ranger)?;
    let id = parse_uuid("id", &id)?;

    ResourceService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Resource deleted"))))
}
