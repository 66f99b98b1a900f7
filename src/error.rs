// ABOUTME: Centralized error type for the bookmark store
// ABOUTME: Classifies storage-engine constraint failures into conflict and missing-reference errors

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[source] DbErr),
    /// A unique or primary-key constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),
    /// A foreign key pointed at a row that does not exist.
    #[error("missing reference: {0}")]
    MissingReference(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid content type: {0}")]
    InvalidContentType(String),
}

impl AppError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    pub fn is_missing_reference(&self) -> bool {
        matches!(self, AppError::MissingReference(_))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                tracing::debug!(%msg, "unique constraint violated");
                AppError::Conflict(msg)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                tracing::debug!(%msg, "foreign key constraint violated");
                AppError::MissingReference(msg)
            }
            _ => {
                tracing::error!(error = %err, "database operation failed");
                AppError::Database(err)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
