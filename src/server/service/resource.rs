use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{resource::ResourceRepository, trip_resource::TripResourceRepository},
    error::AppError,
    model::resource::{CreateResourceParams, Resource},
};

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a resource with a unique name.
    ///
    /// # Returns
    /// - `Ok(Resource)` - The created resource
    /// - `Err(AppError::BadRequest)` - Negative cost or invalid description
    /// - `Err(AppError::Conflict)` - A resource with the same name exists
    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, AppError> {
        if !params.cost.is_finite() || params.cost < 0.0 {
            return Err(AppError::BadRequest("cost must not be negative".to_string()));
        }
        params
            .description
            .validate()
            .map_err(AppError::BadRequest)?;

        let txn = self.db.begin().await?;
        let repo = ResourceRepository::new(&txn);

        let conflict = format!("A resource named '{}' already exists", params.name);
        if repo.name_exists(&params.name).await? {
            return Err(AppError::Conflict(conflict));
        }

        let resource = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))?;

        txn.commit().await?;

        tracing::info!(resource_id = %resource.id, "Resource created");

        Ok(resource)
    }

    pub async fn get_all(&self) -> Result<Vec<Resource>, AppError> {
        Ok(ResourceRepository::new(self.db).get_all().await?)
    }

    /// Deletes a resource that no trip references.
    ///
    /// # Returns
    /// - `Ok(())` - Resource deleted
    /// - `Err(AppError::NotFound)` - Resource does not exist
    /// - `Err(AppError::ResourceInUse)` - At least one trip still links to it; every
    ///   blocking trip is listed
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ResourceRepository::new(&txn);

        let resource = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;

        let trips = TripResourceRepository::new(&txn)
            .get_blocking_trips(id)
            .await?;
        if !trips.is_empty() {
            tracing::debug!(resource_id = %id, trips = trips.len(), "Resource delete blocked");
            return Err(AppError::ResourceInUse {
                message: format!(
                    "Resource '{}' is used by {} trip(s); remove it from them first",
                    resource.name,
                    trips.len()
                ),
                trips,
            });
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(resource_id = %id, "Resource deleted");

        Ok(())
    }
}
