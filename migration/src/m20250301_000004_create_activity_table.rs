use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_catalog_tables::{ActivityCategory, Location};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_uuid(Activity::Id))
                    .col(uuid(Activity::CategoryId))
                    .col(uuid(Activity::LocationId))
                    .col(string(Activity::Name))
                    .col(text_null(Activity::Description))
                    .col(double(Activity::Duration))
                    .col(string_null(Activity::Difficulty))
                    .col(integer(Activity::MinParticipants))
                    .col(integer(Activity::MaxParticipants))
                    .col(boolean(Activity::IsAvailable).default(true))
                    .col(boolean(Activity::IsPublic).default(true))
                    .col(double(Activity::Cost))
                    .col(string_null(Activity::ActivityImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_category_id")
                            .from(Activity::Table, Activity::CategoryId)
                            .to(ActivityCategory::Table, ActivityCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_location_id")
                            .from(Activity::Table, Activity::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    #[sea_orm(iden = "activities")]
    Table,
    Id,
    CategoryId,
    LocationId,
    Name,
    Description,
    Duration,
    Difficulty,
    MinParticipants,
    MaxParticipants,
    IsAvailable,
    IsPublic,
    Cost,
    ActivityImageUrl,
}
