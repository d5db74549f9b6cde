//! In-memory stand-in for the Unkey API used by unit tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use unkey_client::models::{
    ApiData, CreateApiRequest, CreateApiResponseData, CreateIdentityRequest,
    CreateIdentityResponseData, CreateKeyRequest, CreateKeyResponseData, CreatePermissionRequest,
    CreatePermissionResponseData, CreateRoleRequest, CreateRoleResponseData, DeleteApiRequest,
    DeleteIdentityRequest, DeleteKeyRequest, DeletePermissionRequest, DeleteRoleRequest,
    GetApiRequest, GetIdentityRequest, GetKeyRequest, GetPermissionRequest, GetRoleRequest,
    IdentityData, KeyCreditsData, KeyData, KeyIdentity, PermissionData, RatelimitRequest,
    RatelimitResponse, RoleData, UpdateIdentityRequest, UpdateKeyRequest,
};
use unkey_client::{Error, Result, SharedClient, UnkeyApi};

/// Everything the fake has stored or been asked to do.
#[derive(Debug, Default)]
pub struct FakeState {
    next_id: u64,
    pub apis: BTreeMap<String, ApiData>,
    pub keys: BTreeMap<String, KeyData>,
    pub permissions: BTreeMap<String, PermissionData>,
    pub roles: BTreeMap<String, RoleData>,
    pub identities: BTreeMap<String, IdentityData>,
    pub create_key_requests: Vec<CreateKeyRequest>,
    pub key_updates: Vec<UpdateKeyRequest>,
    pub identity_updates: Vec<UpdateIdentityRequest>,
    pub deleted_keys: Vec<DeleteKeyRequest>,
    pub calls: Vec<&'static str>,
}

impl FakeState {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}_{:04}", self.next_id)
    }
}

#[derive(Debug, Default)]
pub struct FakeUnkey {
    pub state: Mutex<FakeState>,
}

impl FakeUnkey {
    /// The fake plus the same instance as a client handle.
    pub fn shared() -> (Arc<Self>, SharedClient) {
        let fake = Arc::new(Self::default());
        let client: SharedClient = fake.clone();
        (fake, client)
    }
}

fn not_found(what: &str, id: &str) -> Error {
    Error::Api {
        status: 404,
        title: "Not Found".into(),
        detail: format!("{what} {id} does not exist"),
        request_id: Some("req_fake".into()),
    }
}

fn ratelimit_responses(ratelimits: &[RatelimitRequest]) -> Vec<RatelimitResponse> {
    ratelimits
        .iter()
        .map(|rl| RatelimitResponse {
            id: format!("rl_{}", rl.name),
            name: rl.name.clone(),
            limit: rl.limit,
            duration: rl.duration,
            auto_apply: rl.auto_apply,
        })
        .collect()
}

fn key_identity(external_id: String) -> KeyIdentity {
    KeyIdentity {
        id: format!("id_{external_id}"),
        external_id,
        meta: None,
        ratelimits: Vec::new(),
    }
}

#[async_trait]
impl UnkeyApi for FakeUnkey {
    async fn create_api(&self, request: CreateApiRequest) -> Result<CreateApiResponseData> {
        let mut state = self.state.lock();
        state.calls.push("apis.createApi");
        let id = state.id("api");
        state.apis.insert(
            id.clone(),
            ApiData {
                id: id.clone(),
                name: request.name,
            },
        );
        Ok(CreateApiResponseData { api_id: id })
    }

    async fn get_api(&self, request: GetApiRequest) -> Result<ApiData> {
        let mut state = self.state.lock();
        state.calls.push("apis.getApi");
        state
            .apis
            .get(&request.api_id)
            .cloned()
            .ok_or_else(|| not_found("API", &request.api_id))
    }

    async fn delete_api(&self, request: DeleteApiRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("apis.deleteApi");
        state
            .apis
            .remove(&request.api_id)
            .map(|_| ())
            .ok_or_else(|| not_found("API", &request.api_id))
    }

    async fn create_key(&self, request: CreateKeyRequest) -> Result<CreateKeyResponseData> {
        let mut state = self.state.lock();
        state.calls.push("keys.createKey");
        state.create_key_requests.push(request.clone());
        let key_id = state.id("key");
        let prefix = request.prefix.clone().unwrap_or_default();
        let key = if prefix.is_empty() {
            format!("plain{key_id}")
        } else {
            format!("{prefix}_plain{key_id}")
        };
        let data = KeyData {
            key_id: key_id.clone(),
            start: key.chars().take(8).collect(),
            enabled: request.enabled.unwrap_or(true),
            name: request.name,
            meta: request.meta,
            expires: request.expires,
            credits: request.credits,
            identity: request.external_id.map(key_identity),
            roles: request.roles.unwrap_or_default(),
            permissions: request.permissions.unwrap_or_default(),
            ratelimits: ratelimit_responses(&request.ratelimits.unwrap_or_default()),
        };
        state.keys.insert(key_id.clone(), data);
        Ok(CreateKeyResponseData { key_id, key })
    }

    async fn get_key(&self, request: GetKeyRequest) -> Result<KeyData> {
        let mut state = self.state.lock();
        state.calls.push("keys.getKey");
        state
            .keys
            .get(&request.key_id)
            .cloned()
            .ok_or_else(|| not_found("Key", &request.key_id))
    }

    async fn update_key(&self, request: UpdateKeyRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("keys.updateKey");
        state.key_updates.push(request.clone());
        let data = state
            .keys
            .get_mut(&request.key_id)
            .ok_or_else(|| not_found("Key", &request.key_id))?;

        if let Some(name) = request.name {
            data.name = name;
        }
        if let Some(external_id) = request.external_id {
            data.identity = external_id.map(key_identity);
        }
        if let Some(meta) = request.meta {
            data.meta = meta;
        }
        if let Some(expires) = request.expires {
            data.expires = expires;
        }
        if let Some(credits) = request.credits {
            data.credits = credits.map(|c| KeyCreditsData {
                remaining: c.remaining,
                refill: c.refill,
            });
        }
        if let Some(enabled) = request.enabled {
            data.enabled = enabled;
        }
        if let Some(roles) = request.roles {
            data.roles = roles;
        }
        if let Some(permissions) = request.permissions {
            data.permissions = permissions;
        }
        if let Some(ratelimits) = request.ratelimits {
            data.ratelimits = ratelimit_responses(&ratelimits);
        }
        Ok(())
    }

    async fn delete_key(&self, request: DeleteKeyRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("keys.deleteKey");
        state
            .keys
            .remove(&request.key_id)
            .ok_or_else(|| not_found("Key", &request.key_id))?;
        state.deleted_keys.push(request);
        Ok(())
    }

    async fn create_permission(
        &self,
        request: CreatePermissionRequest,
    ) -> Result<CreatePermissionResponseData> {
        let mut state = self.state.lock();
        state.calls.push("permissions.createPermission");
        let id = state.id("perm");
        state.permissions.insert(
            id.clone(),
            PermissionData {
                id: id.clone(),
                name: request.name,
                slug: request.slug,
                description: request.description,
            },
        );
        Ok(CreatePermissionResponseData { permission_id: id })
    }

    async fn get_permission(&self, request: GetPermissionRequest) -> Result<PermissionData> {
        let mut state = self.state.lock();
        state.calls.push("permissions.getPermission");
        state
            .permissions
            .get(&request.permission)
            .cloned()
            .ok_or_else(|| not_found("Permission", &request.permission))
    }

    async fn delete_permission(&self, request: DeletePermissionRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("permissions.deletePermission");
        state
            .permissions
            .remove(&request.permission)
            .map(|_| ())
            .ok_or_else(|| not_found("Permission", &request.permission))
    }

    async fn create_role(&self, request: CreateRoleRequest) -> Result<CreateRoleResponseData> {
        let mut state = self.state.lock();
        state.calls.push("permissions.createRole");
        let id = state.id("role");
        state.roles.insert(
            id.clone(),
            RoleData {
                id: id.clone(),
                name: request.name,
                description: request.description,
            },
        );
        Ok(CreateRoleResponseData { role_id: id })
    }

    async fn get_role(&self, request: GetRoleRequest) -> Result<RoleData> {
        let mut state = self.state.lock();
        state.calls.push("permissions.getRole");
        state
            .roles
            .get(&request.role)
            .cloned()
            .ok_or_else(|| not_found("Role", &request.role))
    }

    async fn delete_role(&self, request: DeleteRoleRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("permissions.deleteRole");
        state
            .roles
            .remove(&request.role)
            .map(|_| ())
            .ok_or_else(|| not_found("Role", &request.role))
    }

    async fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> Result<CreateIdentityResponseData> {
        let mut state = self.state.lock();
        state.calls.push("identities.createIdentity");
        let id = state.id("id");
        state.identities.insert(
            id.clone(),
            IdentityData {
                id: id.clone(),
                external_id: request.external_id,
                meta: request.meta,
                ratelimits: ratelimit_responses(&request.ratelimits.unwrap_or_default()),
            },
        );
        Ok(CreateIdentityResponseData { identity_id: id })
    }

    async fn get_identity(&self, request: GetIdentityRequest) -> Result<IdentityData> {
        let mut state = self.state.lock();
        state.calls.push("identities.getIdentity");
        state
            .identities
            .get(&request.identity)
            .cloned()
            .ok_or_else(|| not_found("Identity", &request.identity))
    }

    async fn update_identity(&self, request: UpdateIdentityRequest) -> Result<IdentityData> {
        let mut state = self.state.lock();
        state.calls.push("identities.updateIdentity");
        state.identity_updates.push(request.clone());
        let data = state
            .identities
            .get_mut(&request.identity)
            .ok_or_else(|| not_found("Identity", &request.identity))?;
        if let Some(meta) = request.meta {
            data.meta = meta;
        }
        if let Some(ratelimits) = request.ratelimits {
            data.ratelimits = ratelimit_responses(&ratelimits);
        }
        Ok(data.clone())
    }

    async fn delete_identity(&self, request: DeleteIdentityRequest) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push("identities.deleteIdentity");
        state
            .identities
            .remove(&request.identity)
            .map(|_| ())
            .ok_or_else(|| not_found("Identity", &request.identity))
    }
}
