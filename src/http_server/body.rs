//! Request body buffering
//!
//! Reads the whole body before any handler runs. The read is bounded by the
//! configured timeout and size limit; once the body is buffered the handler
//! runs without a deadline, so a statement that has started is always
//! answered with its real outcome.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tokio::time::timeout;

use crate::observability::{log_event_with_fields, Event};

use super::errors::GatewayError;
use super::routes::GatewayState;

/// Buffer the request body within the read timeout, rejecting slow or
/// oversized bodies with 400
pub async fn buffer_body(
    State(state): State<Arc<GatewayState>>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let (parts, body) = request.into_parts();

    let reason = match timeout(state.read_timeout, to_bytes(body, state.max_body_bytes)).await {
        Ok(Ok(bytes)) => {
            let request = Request::from_parts(parts, Body::from(bytes));
            return Ok(next.run(request).await);
        }
        Ok(Err(_)) => "body unreadable or too large",
        Err(_) => "body read timed out",
    };

    log_event_with_fields(
        Event::RequestRejected,
        &[("path", parts.uri.path()), ("reason", reason)],
    );
    Err(GatewayError::BadRequest)
}
