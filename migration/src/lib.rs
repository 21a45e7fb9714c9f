pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_children_table;
mod m20260810_000003_create_partner_requests_table;
mod m20260810_000004_create_recommendations_table;
mod m20260810_000005_create_user_partners_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_children_table::Migration),
            Box::new(m20260810_000003_create_partner_requests_table::Migration),
            Box::new(m20260810_000004_create_recommendations_table::Migration),
            Box::new(m20260810_000005_create_user_partners_table::Migration),
        ]
    }
}
