//! Shared-secret authentication middleware
//!
//! Runs before the body is read. A missing header counts as the empty string.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

use crate::api::SECRET_HEADER;
use crate::observability::{log_event_with_fields, Event};

use super::errors::GatewayError;
use super::routes::GatewayState;

/// Constant-time exact comparison of the provided and configured secrets
pub fn secret_matches(provided: &[u8], expected: &[u8]) -> bool {
    provided.ct_eq(expected).into()
}

/// Reject requests whose `Rs-Secret` header does not match the configured secret
pub async fn require_secret(
    State(state): State<Arc<GatewayState>>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let provided = request
        .headers()
        .get(SECRET_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    if !secret_matches(provided, state.secret.as_bytes()) {
        log_event_with_fields(Event::AuthRejected, &[("path", request.uri().path())]);
        return Err(GatewayError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_matching() {
        assert!(secret_matches(b"1234", b"1234"));
        assert!(!secret_matches(b"1235", b"1234"));
        assert!(!secret_matches(b"123", b"1234"));
        assert!(!secret_matches(b"", b"1234"));
        assert!(secret_matches(b"", b""));
    }
}
