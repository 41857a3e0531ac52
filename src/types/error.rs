use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // domain failures
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Authentication(String),
    #[error("Time is expired")]
    Expired,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg.clone()),
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for AppError {
    // Coarse mapping preserved from the source API: every domain failure is
    // a 400, anything session/ownership related is a 401.
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Conflict(_)
            | Self::NotFound(_)
            | Self::Authentication(_)
            | Self::Expired => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::Forbidden => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // never leak raw db errors to the client
            Self::Db(_) | Self::Internal(_) => "An error occurred".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_failures_are_bad_request() {
        for err in [
            AppError::Validation("Missing parameter(s)".into()),
            AppError::Conflict("Email or username is already used".into()),
            AppError::NotFound("User not found".into()),
            AppError::Authentication("Password isn't correct".into()),
            AppError::Expired,
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn session_failures_are_unauthorized() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn db_errors_do_not_leak() {
        let err = AppError::Db(DbErr::Custom("connection refused at 10.0.0.3".into()));
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
