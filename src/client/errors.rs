//! # Client Errors

use thiserror::Error;

/// Result type for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`super::Client`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server answered 400: malformed body or missing field
    #[error("bad request")]
    BadRequest,

    /// Server answered 401: secret mismatch
    #[error("unauthorized")]
    Unauthorized,

    /// Server answered 500 with this message
    #[error("internal error: {0}")]
    Internal(String),

    /// Server answered with any other status
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// Base URL could not be parsed or joined
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request encoding or response decoding failed
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-200 status and its body to an error
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            400 => ClientError::BadRequest,
            401 => ClientError::Unauthorized,
            500 => ClientError::Internal(String::from_utf8_lossy(body).into_owned()),
            other => ClientError::UnexpectedStatus(other),
        }
    }
}
