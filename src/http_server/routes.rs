//! Gateway HTTP Routes
//!
//! One `POST` endpoint per store or bridge operation. Each handler decodes
//! and validates its body, appends the `.db` suffix to `dbName`, and runs the
//! store call on the blocking pool.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    middleware,
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;

use crate::api::{
    decode_request, paths, AffectedRowsResponse, CommandRequest, DatabaseRequest,
    NamespaceRequest, SizeResponse, Validate,
};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{db_file_name, Row, SqliteStore, StoreResult};

use super::auth::require_secret;
use super::body::buffer_body;
use super::config::GatewayConfig;
use super::errors::{GatewayError, GatewayResult};

// ==================
// Shared State
// ==================

/// State shared by every gateway handler
#[derive(Debug)]
pub struct GatewayState {
    pub store: SqliteStore,
    pub secret: String,
    /// Deadline for reading a request body
    pub read_timeout: Duration,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl GatewayState {
    /// State with the default body read limits
    pub fn new(store: SqliteStore, secret: impl Into<String>) -> Self {
        let defaults = GatewayConfig::default();
        Self {
            store,
            secret: secret.into(),
            read_timeout: Duration::from_secs(defaults.request_timeout_secs),
            max_body_bytes: defaults.max_body_bytes,
        }
    }

    /// Override the body read limits
    pub fn with_body_limits(mut self, read_timeout: Duration, max_body_bytes: usize) -> Self {
        self.read_timeout = read_timeout;
        self.max_body_bytes = max_body_bytes;
        self
    }
}

// ==================
// Gateway Routes
// ==================

/// Create the authenticated gateway routes
pub fn gateway_routes(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route(paths::NEW_NAMESPACE, post(new_namespace_handler))
        .route(paths::DELETE_NAMESPACE, post(delete_namespace_handler))
        .route(paths::SHOW_NAMESPACE, post(show_namespace_handler))
        .route(paths::CREATE_DB, post(create_db_handler))
        .route(paths::EXECUTE_COMMAND, post(execute_command_handler))
        .route(paths::QUERY_COMMAND, post(query_command_handler))
        .route(paths::DROP_DB, post(drop_db_handler))
        .route(paths::GET_DB_SIZE, post(get_db_size_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), buffer_body))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_secret))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn decode<T>(operation: &str, body: &Bytes) -> GatewayResult<T>
where
    T: DeserializeOwned + Validate,
{
    decode_request(body).ok_or_else(|| {
        log_event_with_fields(Event::RequestRejected, &[("operation", operation)]);
        GatewayError::BadRequest
    })
}

/// Run a store call on the blocking pool, logging failures
async fn run_store<T, F>(state: &GatewayState, operation: &str, call: F) -> GatewayResult<T>
where
    T: Send + 'static,
    F: FnOnce(&SqliteStore) -> StoreResult<T> + Send + 'static,
{
    let store = state.store.clone();
    let result = match tokio::task::spawn_blocking(move || call(&store)).await {
        Ok(result) => result.map_err(GatewayError::from),
        Err(e) => Err(GatewayError::Internal(format!("blocking task failed: {}", e))),
    };

    if let Err(e) = &result {
        let message = e.to_string();
        log_event_with_fields(
            Event::OperationFailed,
            &[("operation", operation), ("error", message.as_str())],
        );
    }
    result
}

// ==================
// Namespace Handlers
// ==================

async fn new_namespace_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<StatusCode> {
    let req: NamespaceRequest = decode("newNamespace", &body)?;
    let namespace = req.namespace.clone();
    run_store(&state, "newNamespace", move |store| store.new_namespace(&namespace)).await?;

    log_event_with_fields(Event::NamespaceCreated, &[("namespace", req.namespace.as_str())]);
    Ok(StatusCode::OK)
}

async fn delete_namespace_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<StatusCode> {
    let req: NamespaceRequest = decode("deleteNamespace", &body)?;
    let namespace = req.namespace.clone();
    run_store(&state, "deleteNamespace", move |store| {
        store.delete_namespace(&namespace)
    })
    .await?;

    log_event_with_fields(Event::NamespaceDeleted, &[("namespace", req.namespace.as_str())]);
    Ok(StatusCode::OK)
}

async fn show_namespace_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<Json<Vec<String>>> {
    let req: NamespaceRequest = decode("showNamespace", &body)?;
    let names = run_store(&state, "showNamespace", move |store| {
        store.show_namespace(&req.namespace)
    })
    .await?;
    Ok(Json(names))
}

// ==================
// Database Handlers
// ==================

async fn create_db_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<StatusCode> {
    let req: DatabaseRequest = decode("createDB", &body)?;
    let (namespace, file) = (req.namespace.clone(), db_file_name(&req.db_name));
    run_store(&state, "createDB", move |store| store.create_db(&namespace, &file)).await?;

    log_event_with_fields(
        Event::DatabaseCreated,
        &[("namespace", req.namespace.as_str()), ("db", req.db_name.as_str())],
    );
    Ok(StatusCode::OK)
}

async fn drop_db_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<StatusCode> {
    let req: DatabaseRequest = decode("dropDB", &body)?;
    let (namespace, file) = (req.namespace.clone(), db_file_name(&req.db_name));
    run_store(&state, "dropDB", move |store| store.drop_db(&namespace, &file)).await?;

    log_event_with_fields(
        Event::DatabaseDropped,
        &[("namespace", req.namespace.as_str()), ("db", req.db_name.as_str())],
    );
    Ok(StatusCode::OK)
}

async fn get_db_size_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<Json<SizeResponse>> {
    let req: DatabaseRequest = decode("getDBSize", &body)?;
    let file = db_file_name(&req.db_name);
    let size = run_store(&state, "getDBSize", move |store| {
        store.db_size(&req.namespace, &file)
    })
    .await?;
    Ok(Json(SizeResponse { size }))
}

// ==================
// Command Handlers
// ==================

async fn execute_command_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<Json<AffectedRowsResponse>> {
    let req: CommandRequest = decode("executeCommand", &body)?;
    let file = db_file_name(&req.db_name);
    let affected_rows = run_store(&state, "executeCommand", move |store| {
        store.execute(&req.namespace, &file, &req.cmd)
    })
    .await?;
    Ok(Json(AffectedRowsResponse { affected_rows }))
}

async fn query_command_handler(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> GatewayResult<Json<Vec<Row>>> {
    let req: CommandRequest = decode("queryCommand", &body)?;
    let file = db_file_name(&req.db_name);
    let rows = run_store(&state, "queryCommand", move |store| {
        store.query(&req.namespace, &file, &req.cmd)
    })
    .await?;
    Ok(Json(rows))
}
