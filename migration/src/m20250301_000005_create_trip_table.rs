use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_uuid(Trip::Id))
                    .col(string(Trip::TripName))
                    .col(date(Trip::StartDate))
                    .col(date(Trip::EndDate))
                    .col(integer(Trip::ParticipantsNumber).default(0))
                    .col(string(Trip::TripStatus).default("pending"))
                    .col(string(Trip::EstimatedWeatherForecast).default(""))
                    .col(text(Trip::Description))
                    .col(double(Trip::TotalCost).default(0.0))
                    .col(string(Trip::TripImageUrl).default(""))
                    .col(uuid(Trip::LeadRanger))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_lead_ranger")
                            .from(Trip::Table, Trip::LeadRanger)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    #[sea_orm(iden = "trips")]
    Table,
    Id,
    TripName,
    StartDate,
    EndDate,
    ParticipantsNumber,
    TripStatus,
    EstimatedWeatherForecast,
    Description,
    TotalCost,
    TripImageUrl,
    LeadRanger,
    CreatedAt,
}
