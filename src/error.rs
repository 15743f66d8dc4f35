use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("An interview has already been scheduled for application {0}")]
    AlreadyScheduled(Uuid),

    #[error("Application {0} is orphaned: its candidate or job record is missing")]
    OrphanedApplication(Uuid),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            // Every fatal mid-flow scheduling failure surfaces as a 500 with
            // the human-readable cause, including the specialized
            // duplicate-interview and orphaned-application messages.
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

/// True when the error is a Postgres unique-constraint violation (23505),
/// used to translate a duplicate interview insert into `AlreadyScheduled`.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        let resp = Error::BadRequest("question_ids must not be empty".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn scheduling_failures_map_to_500() {
        let application_id = Uuid::new_v4();
        for err in [
            Error::AlreadyScheduled(application_id),
            Error::OrphanedApplication(application_id),
            Error::Internal("No rubric version available".into()),
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn specialized_messages_name_the_application() {
        let application_id = Uuid::new_v4();
        let msg = Error::AlreadyScheduled(application_id).to_string();
        assert!(msg.contains("already been scheduled"));
        assert!(msg.contains(&application_id.to_string()));

        let msg = Error::OrphanedApplication(application_id).to_string();
        assert!(msg.contains("orphaned"));
        assert!(msg.contains(&application_id.to_string()));
    }
}
