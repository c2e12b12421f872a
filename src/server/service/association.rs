//! Trip↔Activity and Trip↔Resource links.

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        activity::ActivityRepository, activity_trip::ActivityTripRepository,
        resource::ResourceRepository, trip::TripRepository,
        trip_resource::TripResourceRepository,
    },
    error::AppError,
    model::{
        activity::Activity,
        association::{ActivityTrip, TripResource},
        resource::Resource,
    },
};

pub struct AssociationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssociationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links an activity to a trip.
    ///
    /// The activity is checked before the trip.
    ///
    /// # Returns
    /// - `Ok(ActivityTrip)` - The new link
    /// - `Err(AppError::NotFound)` - Activity or trip does not exist
    /// - `Err(AppError::Conflict)` - The pair is already linked
    pub async fn associate_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<ActivityTrip, AppError> {
        let txn = self.db.begin().await?;

        if ActivityRepository::new(&txn)
            .find_by_id(activity_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }
        if TripRepository::new(&txn).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let repo = ActivityTripRepository::new(&txn);
        if repo.find_pair(trip_id, activity_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Activity is already associated with this trip".to_string(),
            ));
        }

        let link = repo.create(trip_id, activity_id).await.map_err(|e| {
            AppError::conflict_on_unique(e, "Activity is already associated with this trip")
        })?;

        txn.commit().await?;

        tracing::info!(trip_id = %trip_id, activity_id = %activity_id, "Activity associated");

        Ok(link)
    }

    /// Removes the link between an activity and a trip.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(AppError::NotFound)` - The pair was not linked
    pub async fn disassociate_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<(), AppError> {
        let removed = ActivityTripRepository::new(self.db)
            .delete_pair(trip_id, activity_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(
                "Activity is not associated with this trip".to_string(),
            ));
        }

        tracing::info!(trip_id = %trip_id, activity_id = %activity_id, "Activity disassociated");

        Ok(())
    }

    /// Links a resource to a trip.
    ///
    /// The trip is checked before the resource.
    ///
    /// # Returns
    /// - `Ok(TripResource)` - The new link
    /// - `Err(AppError::NotFound)` - Trip or resource does not exist
    /// - `Err(AppError::Conflict)` - The pair is already linked
    pub async fn associate_resource(
        &self,
        trip_id: Uuid,
        resource_id: Uuid,
    ) -> Result<TripResource, AppError> {
        let txn = self.db.begin().await?;

        if TripRepository::new(&txn).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }
        if ResourceRepository::new(&txn)
            .find_by_id(resource_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Resource not found".to_string()));
        }

        let repo = TripResourceRepository::new(&txn);
        if repo.find_pair(trip_id, resource_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Resource is already associated with this trip".to_string(),
            ));
        }

        let link = repo.create(trip_id, resource_id).await.map_err(|e| {
            AppError::conflict_on_unique(e, "Resource is already associated with this trip")
        })?;

        txn.commit().await?;

        tracing::info!(trip_id = %trip_id, resource_id = %resource_id, "Resource associated");

        Ok(link)
    }

    pub async fn disassociate_resource(
        &self,
        trip_id: Uuid,
        resource_id: Uuid,
    ) -> Result<(), AppError> {
        let removed = TripResourceRepository::new(self.db)
            .delete_pair(trip_id, resource_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(
                "Resource is not associated with this trip".to_string(),
            ));
        }

        tracing::info!(trip_id = %trip_id, resource_id = %resource_id, "Resource disassociated");

        Ok(())
    }

    /// Gets the activities linked to a trip.
    pub async fn get_trip_activities(&self, trip_id: Uuid) -> Result<Vec<Activity>, AppError> {
        if TripRepository::new(self.db).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let ids = ActivityTripRepository::new(self.db)
            .get_activity_ids_by_trip(trip_id)
            .await?;

        Ok(ActivityRepository::new(self.db).get_by_ids(ids).await?)
    }

    /// Gets the resources linked to a trip.
    pub async fn get_trip_resources(&self, trip_id: Uuid) -> Result<Vec<Resource>, AppError> {
        if TripRepository::new(self.db).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let ids = TripResourceRepository::new(self.db)
            .get_resource_ids_by_trip(trip_id)
            .await?;

        Ok(ResourceRepository::new(self.db).get_by_ids(ids).await?)
    }
}
