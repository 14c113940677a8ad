use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("missing query parameter: {0}")]
    MissingParam(&'static str),

    #[error("invalid JSON payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("invalid status code: {0}")]
    InvalidStatus(u16),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type MockResult<T> = Result<T, MockError>;

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParam(_) | Self::InvalidPayload(_) | Self::InvalidStatus(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
