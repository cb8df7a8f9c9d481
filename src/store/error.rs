//! Store error types
//!
//! One taxonomy for everything the transactional core can fail with. The
//! executor never masks a functional failure behind a rollback failure: a
//! failed rollback is reported together with the original cause in
//! [`StoreError::TransactionAborted`].

use thiserror::Error;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bad input, caught before a transaction is opened
    #[error("Invalid request: {0}")]
    Validation(String),

    /// A referenced record is absent
    #[error("{0}")]
    NotFound(String),

    /// Source account balance would go negative
    #[error("Insufficient balance on source account")]
    InsufficientBalance,

    /// Store-reported serialization/write conflict under contention.
    /// Never retried inside the core; the caller decides.
    #[error("Write conflict: {0}")]
    Conflict(String),

    /// Unique-constraint violation
    #[error("Record already exists: {0}")]
    Duplicate(String),

    /// The unit of work failed and the rollback failed too; both causes
    /// are carried.
    #[error("Transaction aborted: {cause}; rollback also failed: {rollback}")]
    TransactionAborted {
        cause: Box<StoreError>,
        rollback: String,
    },

    /// Unexpected store/driver failure
    #[error("Database error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "VALIDATION",
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            StoreError::Conflict(_) => "CONFLICT",
            StoreError::Duplicate(_) => "DUPLICATE",
            StoreError::TransactionAborted { .. } => "TRANSACTION_ABORTED",
            StoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::NotFound(_) => 404,
            StoreError::InsufficientBalance => 422,
            StoreError::Conflict(_) | StoreError::Duplicate(_) => 409,
            StoreError::TransactionAborted { .. } | StoreError::Internal(_) => 500,
        }
    }

    /// Whether the caller may retry the whole unit of work
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }

    /// Map a driver error, turning a missing row into a NotFound naming
    /// the entity instead of the generic message
    pub(crate) fn from_sqlx_for(entity: &'static str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound(format!("{entity} not found")),
            other => other.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound("record not found".to_string()),
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // serialization_failure / deadlock_detected
                Some("40001") | Some("40P01") => StoreError::Conflict(db.message().to_string()),
                // unique_violation
                Some("23505") => StoreError::Duplicate(db.message().to_string()),
                // foreign_key_violation
                Some("23503") => {
                    StoreError::NotFound("referenced record does not exist".to_string())
                }
                _ => StoreError::Internal(err.to_string()),
            },
            _ => StoreError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::Validation("bad".into()).code(),
            "VALIDATION"
        );
        assert_eq!(StoreError::InsufficientBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(StoreError::Conflict("c".into()).code(), "CONFLICT");
        assert_eq!(
            StoreError::TransactionAborted {
                cause: Box::new(StoreError::Internal("x".into())),
                rollback: "y".into(),
            }
            .code(),
            "TRANSACTION_ABORTED"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(StoreError::Validation("bad".into()).http_status(), 400);
        assert_eq!(StoreError::NotFound("account not found".into()).http_status(), 404);
        assert_eq!(StoreError::InsufficientBalance.http_status(), 422);
        assert_eq!(StoreError::Conflict("c".into()).http_status(), 409);
        assert_eq!(StoreError::Internal("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_only_conflict_is_retryable() {
        assert!(StoreError::Conflict("c".into()).is_retryable());
        assert!(!StoreError::Validation("v".into()).is_retryable());
        assert!(!StoreError::Internal("i".into()).is_retryable());
        assert!(!StoreError::InsufficientBalance.is_retryable());
    }

    #[test]
    fn test_row_not_found_mapping() {
        let err = StoreError::from_sqlx_for("account", sqlx::Error::RowNotFound);
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "account not found");
    }

    #[test]
    fn test_aborted_carries_both_causes() {
        let err = StoreError::TransactionAborted {
            cause: Box::new(StoreError::InsufficientBalance),
            rollback: "connection reset".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Insufficient balance"));
        assert!(msg.contains("connection reset"));
    }
}
