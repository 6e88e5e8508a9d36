//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{MSG_USER_EXISTS, MSG_USER_NOT_FOUND};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or empty required field, or an unreadable request body.
    /// Raised before any store access.
    #[error("{0}")]
    Validation(String),

    /// Insert hit the primary-key constraint; carries the offending id.
    #[error("User with id {0} already exists")]
    DuplicateKey(String),

    #[error("User not found")]
    NotFound,

    /// Any storage fault not classified above.
    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "User already exists")]
    pub error: String,
    /// Stable error code for programmatic handling
    #[schema(example = "DUPLICATE_KEY")]
    pub code: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateKey(_) => "DUPLICATE_KEY",
            AppError::NotFound => "NOT_FOUND",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateKey(_) => MSG_USER_EXISTS.to_string(),
            AppError::NotFound => MSG_USER_NOT_FOUND.to_string(),

            // Hide details for storage/internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Classify a failed insert: constraint violations become
    /// [`AppError::DuplicateKey`], everything else stays a storage fault.
    pub fn from_insert(err: DbErr, id: &str) -> Self {
        if is_unique_violation(&err) {
            AppError::DuplicateKey(id.to_string())
        } else {
            AppError::Database(err)
        }
    }
}

/// Whether the storage engine rejected a write on a unique or primary key.
fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    // SQLite reports primary-key collisions with their own extended code,
    // which sqlx still folds into its unique-violation kind.
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => {
            e.is_unique_violation()
        }
        _ => false,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::validation("id and name required").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::DuplicateKey("u1".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Database(DbErr::Custom("disk I/O error".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::internal("boom").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_details_are_hidden() {
        let err = AppError::Database(DbErr::Custom("connection refused at 10.0.0.3".into()));
        let message = err.user_message();

        assert_eq!(message, "Database error");
        assert!(!message.contains("10.0.0.3"));
    }

    #[test]
    fn test_duplicate_message() {
        let err = AppError::DuplicateKey("u1".into());
        assert_eq!(err.user_message(), "User already exists");
        assert_eq!(err.to_string(), "User with id u1 already exists");
        assert_eq!(err.code(), "DUPLICATE_KEY");
    }

    #[test]
    fn test_from_insert_keeps_unclassified_errors() {
        let err = AppError::from_insert(DbErr::Custom("disk full".into()), "u1");
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(7u8).ok_or_not_found().unwrap(), 7);
    }
}
