//! Request and response bodies of the Unkey v2 API.
//!
//! Every success response is wrapped in an [`Envelope`]. Field names are
//! camelCase on the wire.

use serde::Deserialize;

mod api;
mod credits;
mod identity;
mod key;
mod permission;
mod ratelimit;

pub use api::{ApiData, CreateApiRequest, CreateApiResponseData, DeleteApiRequest, GetApiRequest};
pub use credits::{KeyCreditsData, KeyCreditsRefill, RefillInterval, UpdateKeyCreditsData};
pub use identity::{
    CreateIdentityRequest, CreateIdentityResponseData, DeleteIdentityRequest, GetIdentityRequest,
    IdentityData, UpdateIdentityRequest,
};
pub use key::{
    CreateKeyRequest, CreateKeyResponseData, DeleteKeyRequest, GetKeyRequest, KeyData,
    KeyIdentity, UpdateKeyRequest,
};
pub use permission::{
    CreatePermissionRequest, CreatePermissionResponseData, CreateRoleRequest,
    CreateRoleResponseData, DeletePermissionRequest, DeleteRoleRequest, GetPermissionRequest,
    GetRoleRequest, PermissionData, RoleData,
};
pub use ratelimit::{RatelimitRequest, RatelimitResponse};

/// Free-form JSON metadata attached to keys and identities.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// Metadata every response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Request id, quoted in support requests
    pub request_id: String,
}

/// `{meta, data}` wrapper around every success body.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Response metadata
    pub meta: ResponseMeta,
    /// Payload
    pub data: T,
}

