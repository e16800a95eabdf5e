use business::domain::errors::RepositoryError;
use tracing::error;

/// Logs the driver error and folds it into the domain error.
pub(crate) fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    error!(operation, error = %err, "Database operation failed");
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::CorruptedRecord
        }
        _ => RepositoryError::DatabaseError,
    }
}
