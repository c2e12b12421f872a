use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityCategory::Table)
                    .if_not_exists()
                    .col(pk_uuid(ActivityCategory::Id))
                    .col(string(ActivityCategory::Name))
                    .col(text_null(ActivityCategory::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_uuid(Location::Id))
                    .col(string(Location::PlaceName))
                    .col(string(Location::Country))
                    .col(string_null(Location::Province))
                    .col(double_null(Location::Latitude))
                    .col(double_null(Location::Longitude))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityCategory {
    #[sea_orm(iden = "activity_categories")]
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub enum Location {
    #[sea_orm(iden = "locations")]
    Table,
    Id,
    PlaceName,
    Country,
    Province,
    Latitude,
    Longitude,
}
