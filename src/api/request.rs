//! API request types
//!
//! JSON request shapes shared by the gateway and the client. Each shape
//! declares its own required fields through [`Validate`].
//!
//! Fields default to the empty string when absent so that a missing field
//! and an empty one fail validation the same way.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::is_valid_segment;

/// Required-field predicate of a request shape
pub trait Validate {
    /// Whether every required field is present and usable
    fn is_valid(&self) -> bool;
}

/// Parse a JSON body into `T` and check its required fields.
///
/// Returns `None` for malformed JSON and for bodies that fail validation.
pub fn decode_request<T>(body: &[u8]) -> Option<T>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_slice(body).ok()?;
    request.is_valid().then_some(request)
}

/// Request addressing a namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRequest {
    #[serde(default)]
    pub namespace: String,
}

impl NamespaceRequest {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Validate for NamespaceRequest {
    fn is_valid(&self) -> bool {
        is_valid_segment(&self.namespace)
    }
}

/// Request addressing a database inside a namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseRequest {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub db_name: String,
}

impl DatabaseRequest {
    pub fn new(namespace: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            db_name: db_name.into(),
        }
    }
}

impl Validate for DatabaseRequest {
    fn is_valid(&self) -> bool {
        is_valid_segment(&self.namespace) && is_valid_segment(&self.db_name)
    }
}

/// Request carrying SQL text for a database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(default)]
    pub cmd: String,
}

impl CommandRequest {
    pub fn new(
        namespace: impl Into<String>,
        db_name: impl Into<String>,
        cmd: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            db_name: db_name.into(),
            cmd: cmd.into(),
        }
    }
}

impl Validate for CommandRequest {
    fn is_valid(&self) -> bool {
        is_valid_segment(&self.namespace) && is_valid_segment(&self.db_name) && !self.cmd.is_empty()
    }
}

/// `newNamespace` body
pub type NewNamespaceRequest = NamespaceRequest;
/// `deleteNamespace` body
pub type DeleteNamespaceRequest = NamespaceRequest;
/// `showNamespace` body
pub type ShowNamespaceRequest = NamespaceRequest;
/// `createDB` body
pub type CreateDbRequest = DatabaseRequest;
/// `dropDB` body
pub type DropDbRequest = DatabaseRequest;
/// `getDBSize` body
pub type GetDbSizeRequest = DatabaseRequest;
/// `executeCommand` body
pub type ExecuteCommandRequest = CommandRequest;
/// `queryCommand` body
pub type QueryCommandRequest = CommandRequest;
