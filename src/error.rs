//! Error types for the booking data store.

use sea_orm::{DbErr, SqlErr};

/// Errors returned by store and repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => return Self::Integrity(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => return Self::Integrity(message),
            _ => {}
        }

        if let DbErr::RecordNotFound(message) = &err {
            return Self::NotFound(message.clone());
        }

        // Fallback for drivers that surface constraint failures without a code
        let text = err.to_string();
        if text.contains("UNIQUE constraint failed") || text.contains("FOREIGN KEY constraint failed") {
            Self::Integrity(text)
        } else {
            Self::Database(err)
        }
    }
}
