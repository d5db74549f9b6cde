use serde::{Deserialize, Serialize};

/// A named rate limit as sent on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatelimitRequest {
    /// Name, unique per key or identity
    pub name: String,
    /// Requests allowed per window
    pub limit: i64,
    /// Window length in milliseconds
    pub duration: i64,
    /// Applied on every verification without being named explicitly
    pub auto_apply: bool,
}

/// A named rate limit as returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatelimitResponse {
    /// Server-side id
    #[serde(default)]
    pub id: String,
    /// Name
    pub name: String,
    /// Requests allowed per window
    pub limit: i64,
    /// Window length in milliseconds
    pub duration: i64,
    /// Auto-apply flag
    #[serde(default)]
    pub auto_apply: bool,
}
