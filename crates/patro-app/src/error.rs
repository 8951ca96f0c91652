use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Writer, async_trait};
use serde_json::json;
use thiserror::Error;

use patro_core::error::CalendarQueryError;
use patro_db::error::DbError;
use patro_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    QueryError(#[from] CalendarQueryError),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

fn query_status(err: &CalendarQueryError) -> StatusCode {
    match err {
        CalendarQueryError::NoSuchMonth { .. } | CalendarQueryError::NoSuchDay { .. } => {
            StatusCode::NOT_FOUND
        }
        CalendarQueryError::InvalidSystem(_)
        | CalendarQueryError::InvalidRange { .. }
        | CalendarQueryError::InvalidMonth(_)
        | CalendarQueryError::InvalidDay(_) => StatusCode::BAD_REQUEST,
    }
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => match err {
                ServiceError::EmptyResult => StatusCode::NOT_FOUND,
                ServiceError::InvalidDateText(_) => StatusCode::BAD_REQUEST,
                _ => err
                    .as_query_error()
                    .map_or(StatusCode::INTERNAL_SERVER_ERROR, query_status),
            },
            Self::DatabaseError(DbError::QueryError(err)) => query_status(err),
            Self::DatabaseError(_) | Self::InvariantViolation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::QueryError(err) => query_status(err),
        }
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        res.status_code(status);
        res.render(Json(json!({ "error": self.to_string() })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = AppError::QueryError(CalendarQueryError::InvalidSystem("julian".to_owned()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::ServiceError(ServiceError::InvalidDateText("start"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lookup_misses_map_to_not_found() {
        let err = AppError::ServiceError(ServiceError::EmptyResult);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = AppError::QueryError(CalendarQueryError::NoSuchMonth {
            system: patro_core::types::CalendarSystem::Bs,
            year: 2099,
            month: 1,
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn wrapped_query_errors_keep_their_status() {
        let err = AppError::ServiceError(ServiceError::DatabaseError(DbError::QueryError(
            CalendarQueryError::InvalidMonth("\"13\" is not a valid month parameter".to_owned()),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
