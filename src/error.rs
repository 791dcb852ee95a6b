//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0} must be set unless DEBUG=true")]
    MissingSetting(&'static str),
    #[error("invalid setting {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },
    #[error("http client: {0}")]
    HttpClient(String),
}

/// Failure of one table operation. Distinct from an empty result set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Connect, timeout or IO failure before a response arrived.
    #[error("transport: {0}")]
    Transport(String),
    /// The table service answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("decode: {0}")]
    Decode(String),
    /// The query was built inconsistently (e.g. two terminal operations).
    #[error("query misuse: {0}")]
    Usage(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn decode(context: &'static str, source: serde_json::Error) -> Self {
        AppError::Decode { context, source }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Query(e) => match e {
                QueryError::Transport(_) | QueryError::Backend { .. } => {
                    (StatusCode::BAD_GATEWAY, "backend_error")
                }
                QueryError::Decode(_) | QueryError::Usage(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "query_error")
                }
            },
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Decode { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "row_decode_error"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        }
        let body = ErrorBody {
            detail: self.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}
