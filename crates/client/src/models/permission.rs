use serde::{Deserialize, Serialize};

/// `permissions.createPermission` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePermissionRequest {
    /// Display name
    pub name: String,
    /// Slug referenced by keys
    pub slug: String,
    /// Description, left out when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `permissions.createPermission` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePermissionResponseData {
    /// New permission id
    pub permission_id: String,
}

/// `permissions.getPermission` body. The API accepts an id or a slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPermissionRequest {
    /// Permission id or slug
    pub permission: String,
}

/// `permissions.getPermission` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PermissionData {
    /// Permission id
    pub id: String,
    /// Display name
    pub name: String,
    /// Slug
    pub slug: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// `permissions.deletePermission` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePermissionRequest {
    /// Permission id or slug
    pub permission: String,
}

/// `permissions.createRole` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRoleRequest {
    /// Role name
    pub name: String,
    /// Description, left out when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `permissions.createRole` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleResponseData {
    /// New role id
    pub role_id: String,
}

/// `permissions.getRole` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetRoleRequest {
    /// Role id or name
    pub role: String,
}

/// `permissions.getRole` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleData {
    /// Role id
    pub id: String,
    /// Role name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// `permissions.deleteRole` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRoleRequest {
    /// Role id or name
    pub role: String,
}
