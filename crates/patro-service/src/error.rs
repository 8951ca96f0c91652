use thiserror::Error;

use patro_core::error::CalendarQueryError;
use patro_db::error::DbError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    QueryError(#[from] CalendarQueryError),

    #[error("invalid {0} date format; supported format: \"yyyy-m-d\"")]
    InvalidDateText(&'static str),

    /// Zero matching days. A legitimate outcome of a valid query, kept
    /// distinct from the validation taxonomy so callers can classify it.
    #[error("no data found for the requested date")]
    EmptyResult,
}

impl ServiceError {
    /// The calendar validation error behind this failure, whether raised
    /// directly or through the database layer.
    #[must_use]
    pub fn as_query_error(&self) -> Option<&CalendarQueryError> {
        match self {
            Self::QueryError(err) | Self::DatabaseError(DbError::QueryError(err)) => Some(err),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
