//! Join records linking trips to activities and resources.

use uuid::Uuid;

use crate::model::{activity::ActivityTripDto, resource::TripResourceDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTrip {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub trip_id: Uuid,
}

impl ActivityTrip {
    pub fn from_entity(entity: entity::activity_trip::Model) -> Self {
        Self {
            id: entity.id,
            activity_id: entity.activity_id,
            trip_id: entity.trip_id,
        }
    }

    pub fn into_dto(self) -> ActivityTripDto {
        ActivityTripDto {
            id: self.id,
            activity_id: self.activity_id,
            trip_id: self.trip_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripResource {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub resource_id: Uuid,
}

impl TripResource {
    pub fn from_entity(entity: entity::trip_resource::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            resource_id: entity.resource_id,
        }
    }

    pub fn into_dto(self) -> TripResourceDto {
        TripResourceDto {
            id: self.id,
            trip_id: self.trip_id,
            resource_id: self.resource_id,
        }
    }
}
