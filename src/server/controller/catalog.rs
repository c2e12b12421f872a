use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{ActivityCategoryListDto, LocationListDto, LocationQuery, RoleListDto},
    },
    server::{
        error::AppError,
        model::catalog::{ActivityCategory, Location, LocationFilter, UserRole},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping reference data endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[utoipa::path(
    get,
    path = "/activity-categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Every activity category", body = ActivityCategoryListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CatalogService::new(&state.db).get_categories().await?;

    Ok((
        StatusCode::OK,
        Json(ActivityCategoryListDto {
            categories: categories
                .into_iter()
                .map(ActivityCategory::into_dto)
                .collect(),
        }),
    ))
}

/// List locations, optionally narrowed by country and province.
#[utoipa::path(
    get,
    path = "/locations",
    tag = CATALOG_TAG,
    params(LocationQuery),
    responses(
        (status = 200, description = "Matching locations", body = LocationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let locations = CatalogService::new(&state.db)
        .get_locations(LocationFilter {
            country: query.country,
            province: query.province,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(LocationListDto {
            locations: locations.into_iter().map(Location::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Every user role", body = RoleListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = CatalogService::new(&state.db).get_roles().await?;

    Ok((
        StatusCode::OK,
        Json(RoleListDto {
            roles: roles.into_iter().map(UserRole::into_dto).collect(),
        }),
    ))
}
