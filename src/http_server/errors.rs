//! # Gateway Errors
//!
//! Every failure ends the request. 400 and 401 carry no body; 500 carries the
//! raw error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for gateway handlers
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Secret header missing or wrong
    #[error("unauthorized")]
    Unauthorized,

    /// Malformed JSON or a required field missing
    #[error("bad request")]
    BadRequest,

    /// Store or command bridge failure
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Blocking task could not complete
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::BadRequest => StatusCode::BAD_REQUEST,
            GatewayError::Store(e) if e.is_invalid_name() => StatusCode::BAD_REQUEST,
            GatewayError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            (status, self.to_string()).into_response()
        } else {
            status.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(GatewayError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::Store(StoreError::NotFound("a/b.db".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Store(StoreError::InvalidName("..".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::Internal("join".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_message_passes_through() {
        let err = GatewayError::from(StoreError::AlreadyExists("team/fick.db".into()));
        assert_eq!(err.to_string(), "already exists: team/fick.db");
    }
}
