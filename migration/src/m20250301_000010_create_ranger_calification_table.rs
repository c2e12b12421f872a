use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000002_create_user_table::User, m20250301_000005_create_trip_table::Trip};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RangerCalification::Table)
                    .if_not_exists()
                    .col(pk_uuid(RangerCalification::Id))
                    .col(uuid(RangerCalification::TripId))
                    .col(uuid(RangerCalification::UserId))
                    .col(uuid(RangerCalification::RangerId))
                    .col(integer(RangerCalification::Calification))
                    .col(text_null(RangerCalification::Comment))
                    .col(
                        timestamp_with_time_zone(RangerCalification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RangerCalification::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranger_califications_trip_id")
                            .from(RangerCalification::Table, RangerCalification::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranger_califications_user_id")
                            .from(RangerCalification::Table, RangerCalification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranger_califications_ranger_id")
                            .from(RangerCalification::Table, RangerCalification::RangerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ranger_califications_trip_user")
                    .table(RangerCalification::Table)
                    .col(RangerCalification::TripId)
                    .col(RangerCalification::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RangerCalification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RangerCalification {
    #[sea_orm(iden = "ranger_califications")]
    Table,
    Id,
    TripId,
    UserId,
    RangerId,
    Calification,
    Comment,
    CreatedAt,
    UpdatedAt,
}
