//! remote-sqlite - an authenticated HTTP gateway over SQLite database files
//!
//! A data root holds one directory per namespace and one `<name>.db` file per
//! database. The gateway exposes namespace and database lifecycle operations
//! plus SQL execution over JSON-over-HTTP; the client wraps the same surface.

pub mod api;
pub mod cli;
pub mod client;
pub mod http_server;
pub mod observability;
pub mod store;
