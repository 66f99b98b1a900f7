// ABOUTME: Library root for the bookmark store schema and persistence layer
// ABOUTME: Exposes entities, migrations, storage operations and read-side projections

pub mod config;
pub mod entities;
pub mod error;
pub mod migration;
pub mod storage;
pub mod types;

#[cfg(test)]
mod migration_tests;

pub use config::Config;
pub use error::{AppError, Result};
pub use storage::Storage;
