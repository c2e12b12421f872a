use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::resource::{CreateResourceParams, Resource};

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, DbErr> {
        let resource = entity::resource::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description.to_json()?),
            cost: ActiveValue::Set(params.cost),
        }
        .insert(self.db)
        .await?;

        Resource::from_entity(resource)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DbErr> {
        entity::prelude::Resource::find_by_id(id)
            .one(self.db)
            .await?
            .map(Resource::from_entity)
            .transpose()
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let resource = entity::prelude::Resource::find()
            .filter(entity::resource::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(resource.is_some())
    }

    pub async fn get_all(&self) -> Result<Vec<Resource>, DbErr> {
        entity::prelude::Resource::find()
            .order_by_asc(entity::resource::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    pub async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Resource>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Resource::find()
            .filter(entity::resource::Column::Id.is_in(ids))
            .order_by_asc(entity::resource::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Resource::from_entity)
            .collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Resource::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
