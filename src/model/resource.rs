use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Structured payload stored in the resource `description` column.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ResourceDescriptionDto {
    pub summary: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ResourceDto {
    pub id: Uuid,
    pub name: String,
    pub description: ResourceDescriptionDto,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResourceListDto {
    pub resources: Vec<ResourceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateResourceDto {
    pub name: Option<String>,
    pub description: Option<ResourceDescriptionDto>,
    pub cost: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TripResourceDto {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub resource_id: Uuid,
}

/// Body of `POST /trip-resources` and `DELETE /trip-resources`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct TripResourcePairDto {
    pub trip_id: Option<String>,
    pub resource_id: Option<String>,
}

/// A trip that still references a resource.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlockingTripDto {
    pub id: Uuid,
    pub name: String,
}

/// Returned with `409 Conflict` when a referenced resource is deleted.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResourceInUseDto {
    pub message: String,
    pub trips: Vec<BlockingTripDto>,
}
