pub use sea_orm_migration::prelude::*;

mod m20240312_000001_create_guild_table;
mod m20240312_000002_create_roles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240312_000001_create_guild_table::Migration),
            Box::new(m20240312_000002_create_roles_table::Migration),
        ]
    }
}
