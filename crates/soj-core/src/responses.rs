//! CLI response types returned as JSON by `soj` commands.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Response from `soj auth login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub user_id: String,
    pub role: Role,
    pub email: Option<String>,
}

/// Response from `soj auth logout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    pub cleared: bool,
}

/// Response from `soj auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub nav_root: String,
    pub token_source: Option<String>,
    pub note: Option<String>,
}

/// Response from `soj push register` / `soj push unregister`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushResponse {
    pub registered: bool,
    pub device_id: String,
}

/// Response from `soj resource <kind> delete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}
