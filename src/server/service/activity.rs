use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        activity::ActivityRepository,
        catalog::{ActivityCategoryRepository, LocationRepository},
    },
    error::AppError,
    model::activity::{Activity, CreateActivityParams},
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an activity in an existing category and location.
    ///
    /// # Returns
    /// - `Ok(Activity)` - The created activity
    /// - `Err(AppError::BadRequest)` - Numeric fields out of range
    /// - `Err(AppError::NotFound)` - Category or location does not exist
    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let txn = self.db.begin().await?;

        if ActivityCategoryRepository::new(&txn)
            .find_by_id(params.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Activity category not found".to_string()));
        }
        if LocationRepository::new(&txn)
            .find_by_id(params.location_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Location not found".to_string()));
        }

        let activity = ActivityRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(activity_id = %activity.id, "Activity created");

        Ok(activity)
    }

    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        Ok(ActivityRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        Ok(ActivityRepository::new(self.db).find_by_id(id).await?)
    }
}
