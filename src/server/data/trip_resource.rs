use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{association::TripResource, resource::BlockingTrip};

pub struct TripResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_pair(
        &self,
        trip_id: Uuid,
        resource_id: Uuid,
    ) -> Result<Option<TripResource>, DbErr> {
        let link = entity::prelude::TripResource::find()
            .filter(entity::trip_resource::Column::TripId.eq(trip_id))
            .filter(entity::trip_resource::Column::ResourceId.eq(resource_id))
            .one(self.db)
            .await?;

        Ok(link.map(TripResource::from_entity))
    }

    pub async fn create(&self, trip_id: Uuid, resource_id: Uuid) -> Result<TripResource, DbErr> {
        let link = entity::trip_resource::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            trip_id: ActiveValue::Set(trip_id),
            resource_id: ActiveValue::Set(resource_id),
        }
        .insert(self.db)
        .await?;

        Ok(TripResource::from_entity(link))
    }

    pub async fn delete_pair(&self, trip_id: Uuid, resource_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::TripResource::delete_many()
            .filter(entity::trip_resource::Column::TripId.eq(trip_id))
            .filter(entity::trip_resource::Column::ResourceId.eq(resource_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_trip(&self, trip_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::TripResource::delete_many()
            .filter(entity::trip_resource::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_resource_ids_by_trip(&self, trip_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::TripResource::find()
            .select_only()
            .column(entity::trip_resource::Column::ResourceId)
            .filter(entity::trip_resource::Column::TripId.eq(trip_id))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }

    /// Gets every trip that links to a resource.
    ///
    /// # Returns
    /// - `Ok(Vec<BlockingTrip>)` - Id and name of each referencing trip, empty when the
    ///   resource is unreferenced
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_blocking_trips(&self, resource_id: Uuid) -> Result<Vec<BlockingTrip>, DbErr> {
        let rows = entity::prelude::TripResource::find()
            .filter(entity::trip_resource::Column::ResourceId.eq(resource_id))
            .find_also_related(entity::prelude::Trip)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, trip)| trip)
            .map(|trip| BlockingTrip {
                id: trip.id,
                name: trip.trip_name,
            })
            .collect())
    }
}
