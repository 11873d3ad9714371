//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Query of the username endpoint (`?userID=<id>`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsernameQuery {
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameDto {
    pub username: String,
}

/// One registry entry as shown by the debug endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDto {
    pub connection_id: String,
    pub user_id: Option<String>,
    /// RFC 3339, UTC
    pub connected_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
