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
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Payment::Id))
                    .col(uuid(Payment::UserId))
                    .col(uuid(Payment::TripId))
                    .col(double_null(Payment::Amount))
                    .col(string_null(Payment::PaymentMethod))
                    .col(string_null(Payment::VoucherUrl))
                    .col(string(Payment::Status).default("Pendiente"))
                    .col(
                        timestamp_with_time_zone(Payment::PaymentDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_user_id")
                            .from(Payment::Table, Payment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_trip_id")
                            .from(Payment::Table, Payment::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payments_trip_user")
                    .table(Payment::Table)
                    .col(Payment::TripId)
                    .col(Payment::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    UserId,
    TripId,
    Amount,
    PaymentMethod,
    VoucherUrl,
    Status,
    PaymentDate,
}
