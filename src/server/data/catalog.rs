//! Repositories for the activity catalog lookups: categories and locations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::model::catalog::{ActivityCategory, Location, LocationFilter};

pub struct ActivityCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityCategory>, DbErr> {
        let category = entity::prelude::ActivityCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(ActivityCategory::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<ActivityCategory>, DbErr> {
        let categories = entity::prelude::ActivityCategory::find()
            .order_by_asc(entity::activity_category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories
            .into_iter()
            .map(ActivityCategory::from_entity)
            .collect())
    }
}

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, DbErr> {
        let location = entity::prelude::Location::find_by_id(id).one(self.db).await?;

        Ok(location.map(Location::from_entity))
    }

    /// Gets locations matching the filter exactly, ordered by place name.
    pub async fn get_filtered(&self, filter: LocationFilter) -> Result<Vec<Location>, DbErr> {
        let mut query = entity::prelude::Location::find();

        if let Some(country) = filter.country {
            query = query.filter(entity::location::Column::Country.eq(country));
        }
        if let Some(province) = filter.province {
            query = query.filter(entity::location::Column::Province.eq(province));
        }

        let locations = query
            .order_by_asc(entity::location::Column::PlaceName)
            .all(self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }
}
