pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_portfolios_table;
mod m20250301_000002_create_leaf_tables;
mod m20250301_000003_create_entry_tables;
mod m20250301_000004_create_blog_posts_table;
mod m20250301_000005_create_link_tables;
mod m20250302_000001_add_link_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_portfolios_table::Migration),
            Box::new(m20250301_000002_create_leaf_tables::Migration),
            Box::new(m20250301_000003_create_entry_tables::Migration),
            Box::new(m20250301_000004_create_blog_posts_table::Migration),
            Box::new(m20250301_000005_create_link_tables::Migration),
            Box::new(m20250302_000001_add_link_indexes::Migration),
        ]
    }
}
