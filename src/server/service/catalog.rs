//! Read-only lookups over categories, locations and roles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        catalog::{ActivityCategoryRepository, LocationRepository},
        user_role::UserRoleRepository,
    },
    error::AppError,
    model::catalog::{ActivityCategory, Location, LocationFilter, UserRole},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_categories(&self) -> Result<Vec<ActivityCategory>, AppError> {
        Ok(ActivityCategoryRepository::new(self.db).get_all().await?)
    }

    /// Gets locations matching the exact country and province filters.
    ///
    /// Blank filter values are treated as absent.
    pub async fn get_locations(&self, filter: LocationFilter) -> Result<Vec<Location>, AppError> {
        let filter = LocationFilter {
            country: filter.country.filter(|c| !c.trim().is_empty()),
            province: filter.province.filter(|p| !p.trim().is_empty()),
        };

        Ok(LocationRepository::new(self.db).get_filtered(filter).await?)
    }

    pub async fn get_roles(&self) -> Result<Vec<UserRole>, AppError> {
        Ok(UserRoleRepository::new(self.db).get_all().await?)
    }
}
