//! Classification of SQLx errors into [`RepositoryError`].

use crate::domain::repositories::RepositoryError;

/// Name of the unique constraint guarding `url_mappings.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && db_err.is_unique_violation()
        {
            return RepositoryError::UniqueViolation {
                constraint: db_err.constraint().map(str::to_string),
            };
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return RepositoryError::NotFound;
        }

        RepositoryError::Storage(e.to_string())
    }
}
