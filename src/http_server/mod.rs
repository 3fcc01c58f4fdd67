//! # Gateway HTTP Server
//!
//! Authenticated HTTP surface over the namespace/database store.
//!
//! Request flow: authenticate (`Rs-Secret`) -> buffer body -> parse -> validate ->
//! dispatch to the store on the blocking pool -> respond.
//!
//! # Endpoints
//!
//! - `/health` - Health check (no secret required)
//! - `/api/v1/*` - Namespace, database and command operations

pub mod auth;
pub mod body;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod routes;
pub mod server;

pub use config::GatewayConfig;
pub use errors::{GatewayError, GatewayResult};
pub use routes::{gateway_routes, GatewayState};
pub use server::{prepare_data_root, shutdown_signal, GatewayServer};
