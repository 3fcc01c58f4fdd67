//! Wire protocol shared by the gateway and the client
//!
//! Every operation is a `POST` under [`API_PREFIX`] carrying a JSON body and
//! the shared secret in the [`SECRET_HEADER`] header.
//!
//! # Operations
//!
//! - newNamespace
//! - deleteNamespace
//! - showNamespace
//! - createDB
//! - executeCommand
//! - queryCommand
//! - dropDB
//! - getDBSize

mod request;
mod response;

pub use request::{
    decode_request, CommandRequest, CreateDbRequest, DatabaseRequest, DeleteNamespaceRequest,
    DropDbRequest, ExecuteCommandRequest, GetDbSizeRequest, NamespaceRequest, NewNamespaceRequest,
    QueryCommandRequest, ShowNamespaceRequest, Validate,
};
pub use response::{AffectedRowsResponse, SizeResponse};

/// Header carrying the shared secret
pub const SECRET_HEADER: &str = "Rs-Secret";

/// Path prefix of every operation
pub const API_PREFIX: &str = "/api/v1";

/// Operation paths, relative to [`API_PREFIX`]
pub mod paths {
    pub const NEW_NAMESPACE: &str = "/newNamespace";
    pub const DELETE_NAMESPACE: &str = "/deleteNamespace";
    pub const SHOW_NAMESPACE: &str = "/showNamespace";
    pub const CREATE_DB: &str = "/createDB";
    pub const EXECUTE_COMMAND: &str = "/executeCommand";
    pub const QUERY_COMMAND: &str = "/queryCommand";
    pub const DROP_DB: &str = "/dropDB";
    pub const GET_DB_SIZE: &str = "/getDBSize";
}
