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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Reservation::Id))
                    .col(uuid(Reservation::TripId))
                    .col(uuid(Reservation::UserId))
                    .col(string(Reservation::Status))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // Trips cannot be deleted while reserved; restrict is the backstop.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_trip_id")
                            .from(Reservation::Table, Reservation::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user_id")
                            .from(Reservation::Table, Reservation::UserId)
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
                    .name("idx_reservations_trip_user")
                    .table(Reservation::Table)
                    .col(Reservation::TripId)
                    .col(Reservation::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    TripId,
    UserId,
    Status,
    CreatedAt,
}
