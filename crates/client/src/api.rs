//! The seam between resources and the remote API.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    ApiData, CreateApiRequest, CreateApiResponseData, CreateIdentityRequest,
    CreateIdentityResponseData, CreateKeyRequest, CreateKeyResponseData, CreatePermissionRequest,
    CreatePermissionResponseData, CreateRoleRequest, CreateRoleResponseData, DeleteApiRequest,
    DeleteIdentityRequest, DeleteKeyRequest, DeletePermissionRequest, DeleteRoleRequest,
    GetApiRequest, GetIdentityRequest, GetKeyRequest, GetPermissionRequest, GetRoleRequest,
    IdentityData, KeyData, PermissionData, RoleData, UpdateIdentityRequest, UpdateKeyRequest,
};

/// Operations the provider performs against Unkey.
///
/// [`UnkeyClient`](crate::UnkeyClient) implements it over HTTP; tests
/// substitute in-memory fakes.
#[async_trait]
pub trait UnkeyApi: Debug + Send + Sync {
    /// `apis.createApi`
    async fn create_api(&self, request: CreateApiRequest) -> Result<CreateApiResponseData>;
    /// `apis.getApi`
    async fn get_api(&self, request: GetApiRequest) -> Result<ApiData>;
    /// `apis.deleteApi`
    async fn delete_api(&self, request: DeleteApiRequest) -> Result<()>;

    /// `keys.createKey`
    async fn create_key(&self, request: CreateKeyRequest) -> Result<CreateKeyResponseData>;
    /// `keys.getKey`
    async fn get_key(&self, request: GetKeyRequest) -> Result<KeyData>;
    /// `keys.updateKey`
    async fn update_key(&self, request: UpdateKeyRequest) -> Result<()>;
    /// `keys.deleteKey`
    async fn delete_key(&self, request: DeleteKeyRequest) -> Result<()>;

    /// `permissions.createPermission`
    async fn create_permission(
        &self,
        request: CreatePermissionRequest,
    ) -> Result<CreatePermissionResponseData>;
    /// `permissions.getPermission`
    async fn get_permission(&self, request: GetPermissionRequest) -> Result<PermissionData>;
    /// `permissions.deletePermission`
    async fn delete_permission(&self, request: DeletePermissionRequest) -> Result<()>;

    /// `permissions.createRole`
    async fn create_role(&self, request: CreateRoleRequest) -> Result<CreateRoleResponseData>;
    /// `permissions.getRole`
    async fn get_role(&self, request: GetRoleRequest) -> Result<RoleData>;
    /// `permissions.deleteRole`
    async fn delete_role(&self, request: DeleteRoleRequest) -> Result<()>;

    /// `identities.createIdentity`
    async fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> Result<CreateIdentityResponseData>;
    /// `identities.getIdentity`
    async fn get_identity(&self, request: GetIdentityRequest) -> Result<IdentityData>;
    /// `identities.updateIdentity`
    async fn update_identity(&self, request: UpdateIdentityRequest) -> Result<IdentityData>;
    /// `identities.deleteIdentity`
    async fn delete_identity(&self, request: DeleteIdentityRequest) -> Result<()>;
}

/// Client handle shared by every resource after provider configure.
pub type SharedClient = Arc<dyn UnkeyApi>;
