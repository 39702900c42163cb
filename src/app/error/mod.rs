use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::ValidationErrors;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type for the API handlers.
///
/// Validation errors are the caller's fault and their message is shown to the end user
/// verbatim. Unexpected errors only ever expose the fixed public message of the handler
/// that failed; the underlying cause goes to the log.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{message}")]
    UnexpectedError {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn unexpected(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::UnexpectedError {
            message,
            source: source.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}

/// Unparseable bodies are reported like any other invalid input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(format!("Validation error: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) => {
                tracing::info!(detail = %s, "rejected invalid payload");
            }
            Self::UnexpectedError { ref source, .. } => {
                tracing::error!(detail = ?source, "{}", self);
            }
        }

        (
            self.status_code(),
            Json(schema::Failure {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
