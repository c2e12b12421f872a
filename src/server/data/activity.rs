use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::activity::{Activity, CreateActivityParams};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, DbErr> {
        let activity = entity::activity::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            category_id: ActiveValue::Set(params.category_id),
            location_id: ActiveValue::Set(params.location_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            duration: ActiveValue::Set(params.duration),
            difficulty: ActiveValue::Set(params.difficulty),
            min_participants: ActiveValue::Set(params.min_participants),
            max_participants: ActiveValue::Set(params.max_participants),
            is_available: ActiveValue::Set(params.is_available),
            is_public: ActiveValue::Set(params.is_public),
            cost: ActiveValue::Set(params.cost),
            activity_image_url: ActiveValue::Set(params.activity_image_url),
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(activity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, DbErr> {
        let activity = entity::prelude::Activity::find_by_id(id).one(self.db).await?;

        Ok(activity.map(Activity::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Name)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Activity>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let activities = entity::prelude::Activity::find()
            .filter(entity::activity::Column::Id.is_in(ids))
            .order_by_asc(entity::activity::Column::Name)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }
}
