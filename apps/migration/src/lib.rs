//! Schema migrations for the blog tables.

pub use sea_orm_migration::prelude::*;

mod m20150108_000001_create_categories;
mod m20150108_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20150108_000001_create_categories::Migration),
            Box::new(m20150108_000002_create_posts::Migration),
        ]
    }
}
