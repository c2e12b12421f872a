use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Roles every deployment starts with. Role checks compare against these names.
const SEED_ROLES: [&str; 3] = ["Explorer", "Ranger", "Admin"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRole::Table)
                    .if_not_exists()
                    .col(pk_uuid(UserRole::Id))
                    .col(string_uniq(UserRole::RoleName))
                    .to_owned(),
            )
            .await?;

        for role_name in SEED_ROLES {
            let insert = Query::insert()
                .into_table(UserRole::Table)
                .columns([UserRole::Id, UserRole::RoleName])
                .values_panic([::uuid::Uuid::new_v4().into(), role_name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserRole {
    #[sea_orm(iden = "user_roles")]
    Table,
    Id,
    RoleName,
}
