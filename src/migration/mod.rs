// ABOUTME: SeaORM migration module for database schema management
// ABOUTME: Applies the auth adapter tables first, then the content tables that reference them

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_auth_tables::Migration),
            Box::new(m20240601_000002_create_content_tables::Migration),
        ]
    }
}

pub mod m20240601_000001_create_auth_tables;
pub mod m20240601_000002_create_content_tables;
