pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_role_table;
mod m20250301_000002_create_user_table;
mod m20250301_000003_create_catalog_tables;
mod m20250301_000004_create_activity_table;
mod m20250301_000005_create_trip_table;
mod m20250301_000006_create_reservation_table;
mod m20250301_000007_create_activity_trip_table;
mod m20250301_000008_create_resource_tables;
mod m20250301_000009_create_payment_table;
mod m20250301_000010_create_ranger_calification_table;
mod m20250301_000011_create_certification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_role_table::Migration),
            Box::new(m20250301_000002_create_user_table::Migration),
            Box::new(m20250301_000003_create_catalog_tables::Migration),
            Box::new(m20250301_000004_create_activity_table::Migration),
            Box::new(m20250301_000005_create_trip_table::Migration),
            Box::new(m20250301_000006_create_reservation_table::Migration),
            Box::new(m20250301_000007_create_activity_trip_table::Migration),
            Box::new(m20250301_000008_create_resource_tables::Migration),
            Box::new(m20250301_000009_create_payment_table::Migration),
            Box::new(m20250301_000010_create_ranger_calification_table::Migration),
            Box::new(m20250301_000011_create_certification_table::Migration),
        ]
    }
}
