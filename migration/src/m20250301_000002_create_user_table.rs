use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_role_table::UserRole;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_null(User::Nationality))
                    .col(string_null(User::Rut))
                    .col(string_null(User::PassportNumber))
                    .col(uuid(User::RoleId))
                    .col(text_null(User::Biography))
                    .col(json_null(User::BiographyExtend))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(string(User::UserStatus).default("activo"))
                    .col(double_null(User::Rating))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_role_id")
                            .from(User::Table, User::RoleId)
                            .to(UserRole::Table, UserRole::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Nationality,
    Rut,
    PassportNumber,
    RoleId,
    Biography,
    BiographyExtend,
    Email,
    Password,
    UserStatus,
    Rating,
    CreatedAt,
}
