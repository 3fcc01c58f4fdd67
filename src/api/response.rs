//! API response types

use serde::{Deserialize, Serialize};

/// `executeCommand` result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedRowsResponse {
    pub affected_rows: u64,
}

/// `getDBSize` result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeResponse {
    pub size: u64,
}
