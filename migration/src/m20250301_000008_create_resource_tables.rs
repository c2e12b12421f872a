use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_trip_table::Trip;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_uuid(Resource::Id))
                    .col(string_uniq(Resource::Name))
                    .col(json(Resource::Description))
                    .col(double(Resource::Cost).default(0.0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TripResource::Table)
                    .if_not_exists()
                    .col(pk_uuid(TripResource::Id))
                    .col(uuid(TripResource::TripId))
                    .col(uuid(TripResource::ResourceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_resources_trip_id")
                            .from(TripResource::Table, TripResource::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Resources in use must be detached explicitly before deletion.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_resources_resource_id")
                            .from(TripResource::Table, TripResource::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_resources_pair")
                    .table(TripResource::Table)
                    .col(TripResource::TripId)
                    .col(TripResource::ResourceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripResource::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    Name,
    Description,
    Cost,
}

#[derive(DeriveIden)]
pub enum TripResource {
    #[sea_orm(iden = "trip_resources")]
    Table,
    Id,
    TripId,
    ResourceId,
}
