use axum::{
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error responses use short machine-readable codes in the body
/// (`{"error": "missing_token"}`) so clients can match on them.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid bearer token")]
    InvalidToken,

    #[error("rate limited, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },
}

impl ServerError {
    fn code(&self) -> &'static str {
        match self {
            ServerError::MissingToken => "missing_token",
            ServerError::InvalidToken => "invalid_token",
            ServerError::RateLimited { .. } => "rate_limited",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::MissingToken => StatusCode::UNAUTHORIZED,
            ServerError::InvalidToken => StatusCode::FORBIDDEN,
            ServerError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = Json(json!({
            "error": self.code(),
        }));

        let mut response = (status, body).into_response();

        if let ServerError::RateLimited { retry_after } = self {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after));
        }

        response
    }
}
