pub use sea_orm_migration::prelude::*;

mod m20260612_000001_create_users_table;
mod m20260612_000002_create_sessions_table;
mod m20260612_000003_create_events_table;
mod m20260615_000004_create_save_files_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_000001_create_users_table::Migration),
            Box::new(m20260612_000002_create_sessions_table::Migration),
            Box::new(m20260612_000003_create_events_table::Migration),
            Box::new(m20260615_000004_create_save_files_table::Migration),
        ]
    }
}
