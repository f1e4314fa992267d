//! Error type returned by ledger write paths.

use fintrack_core::ledger::{ErrorKind, FinanceError};
use fintrack_shared::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Outcome of a failed ledger operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The write was rejected by the validation engine; nothing was written.
    #[error(transparent)]
    Rejected(#[from] FinanceError),

    /// The store could not be reached.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(DbErr),

    /// Any other store failure.
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl LedgerError {
    /// Returns the flat error kind for this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected(e) => e.kind(),
            Self::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            Self::Database(_) => ErrorKind::Storage,
        }
    }

    /// Returns the validation failure, if this is one.
    #[must_use]
    pub const fn as_rejection(&self) -> Option<&FinanceError> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for LedgerError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
            Self::StorageUnavailable(err)
        } else {
            Self::Database(err)
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Rejected(e) => e.into(),
            LedgerError::StorageUnavailable(e) => Self::StorageUnavailable(e.to_string()),
            LedgerError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnAcquireErr;

    #[test]
    fn test_connection_failures_are_unavailable() {
        let err = LedgerError::from(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
        assert_eq!(AppError::from(err).status_code(), 503);
    }

    #[test]
    fn test_other_failures_are_storage() {
        let err = LedgerError::from(DbErr::RecordNotFound("x".into()));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(AppError::from(err).error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_rejection_keeps_kind() {
        let err = LedgerError::from(FinanceError::NoIncomeSet);
        assert_eq!(err.kind(), ErrorKind::NoIncomeSet);
        assert_eq!(err.as_rejection(), Some(&FinanceError::NoIncomeSet));
        assert_eq!(AppError::from(err).status_code(), 422);
    }
}
