use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_activity_table::Activity, m20250301_000005_create_trip_table::Trip,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityTrip::Table)
                    .if_not_exists()
                    .col(pk_uuid(ActivityTrip::Id))
                    .col(uuid(ActivityTrip::ActivityId))
                    .col(uuid(ActivityTrip::TripId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_trips_activity_id")
                            .from(ActivityTrip::Table, ActivityTrip::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_trips_trip_id")
                            .from(ActivityTrip::Table, ActivityTrip::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_trips_pair")
                    .table(ActivityTrip::Table)
                    .col(ActivityTrip::ActivityId)
                    .col(ActivityTrip::TripId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityTrip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityTrip {
    #[sea_orm(iden = "activity_trips")]
    Table,
    Id,
    ActivityId,
    TripId,
}
