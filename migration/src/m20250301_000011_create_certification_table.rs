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
                    .table(Certification::Table)
                    .if_not_exists()
                    .col(pk_uuid(Certification::Id))
                    .col(uuid(Certification::UserId))
                    .col(string(Certification::Name))
                    .col(string_null(Certification::IssuingBody))
                    .col(date_null(Certification::IssuedAt))
                    .col(date_null(Certification::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certifications_user_id")
                            .from(Certification::Table, Certification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Certification {
    #[sea_orm(iden = "certifications")]
    Table,
    Id,
    UserId,
    Name,
    IssuingBody,
    IssuedAt,
    ExpiresAt,
}
