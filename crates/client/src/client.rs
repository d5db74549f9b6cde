//! HTTP implementation of [`UnkeyApi`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::UnkeyApi;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{
    ApiData, CreateApiRequest, CreateApiResponseData, CreateIdentityRequest,
    CreateIdentityResponseData, CreateKeyRequest, CreateKeyResponseData, CreatePermissionRequest,
    CreatePermissionResponseData, CreateRoleRequest, CreateRoleResponseData, DeleteApiRequest,
    DeleteIdentityRequest, DeleteKeyRequest, DeletePermissionRequest, DeleteRoleRequest, Envelope,
    GetApiRequest, GetIdentityRequest, GetKeyRequest, GetPermissionRequest,
    GetRoleRequest, IdentityData, KeyData, PermissionData, RoleData, UpdateIdentityRequest,
    UpdateKeyRequest,
};

/// Unkey v2 REST client.
///
/// Every operation is a JSON `POST` to `{base_url}/v2/{operation}` with the
/// root key as bearer token.
#[derive(Debug, Clone)]
pub struct UnkeyClient {
    http: Client,
    base_url: String,
}

impl UnkeyClient {
    /// Builds a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the configuration is unusable
    /// or the root key is not a valid header value, and [`Error::Http`] when
    /// the TLS backend fails to initialise.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.root_key.expose_secret()))
                .map_err(|_| Error::InvalidConfig {
                    message: "root key contains characters not allowed in an HTTP header"
                        .to_string(),
                })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<B>(&self, operation: &str, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}/v2/{operation}", self.base_url);
        debug!(%url, "Calling Unkey API");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = Error::from_response(status.as_u16(), &bytes);
            debug!(%operation, status = status.as_u16(), error = %err, "Unkey API call failed");
            return Err(err);
        }
        Ok(bytes.to_vec())
    }

    async fn call<B, T>(&self, operation: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let bytes = self.send(operation, body).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        debug!(%operation, request_id = %envelope.meta.request_id, "Unkey API call succeeded");
        Ok(envelope.data)
    }

    /// For operations whose payload carries nothing the provider needs.
    async fn call_empty<B>(&self, operation: &str, body: &B) -> Result<()>
    where
        B: Serialize + Sync,
    {
        self.send(operation, body).await?;
        debug!(%operation, "Unkey API call succeeded");
        Ok(())
    }
}

#[async_trait]
impl UnkeyApi for UnkeyClient {
    #[instrument(skip_all)]
    async fn create_api(&self, request: CreateApiRequest) -> Result<CreateApiResponseData> {
        self.call("apis.createApi", &request).await
    }

    #[instrument(skip_all, fields(api_id = %request.api_id))]
    async fn get_api(&self, request: GetApiRequest) -> Result<ApiData> {
        self.call("apis.getApi", &request).await
    }

    #[instrument(skip_all, fields(api_id = %request.api_id))]
    async fn delete_api(&self, request: DeleteApiRequest) -> Result<()> {
        self.call_empty("apis.deleteApi", &request).await
    }

    #[instrument(skip_all, fields(api_id = %request.api_id))]
    async fn create_key(&self, request: CreateKeyRequest) -> Result<CreateKeyResponseData> {
        self.call("keys.createKey", &request).await
    }

    #[instrument(skip_all, fields(key_id = %request.key_id))]
    async fn get_key(&self, request: GetKeyRequest) -> Result<KeyData> {
        self.call("keys.getKey", &request).await
    }

    #[instrument(skip_all, fields(key_id = %request.key_id))]
    async fn update_key(&self, request: UpdateKeyRequest) -> Result<()> {
        self.call_empty("keys.updateKey", &request).await
    }

    #[instrument(skip_all, fields(key_id = %request.key_id, permanent = request.permanent))]
    async fn delete_key(&self, request: DeleteKeyRequest) -> Result<()> {
        self.call_empty("keys.deleteKey", &request).await
    }

    #[instrument(skip_all, fields(slug = %request.slug))]
    async fn create_permission(
        &self,
        request: CreatePermissionRequest,
    ) -> Result<CreatePermissionResponseData> {
        self.call("permissions.createPermission", &request).await
    }

    #[instrument(skip_all, fields(permission = %request.permission))]
    async fn get_permission(&self, request: GetPermissionRequest) -> Result<PermissionData> {
        self.call("permissions.getPermission", &request).await
    }

    #[instrument(skip_all, fields(permission = %request.permission))]
    async fn delete_permission(&self, request: DeletePermissionRequest) -> Result<()> {
        self.call_empty("permissions.deletePermission", &request).await
    }

    #[instrument(skip_all, fields(name = %request.name))]
    async fn create_role(&self, request: CreateRoleRequest) -> Result<CreateRoleResponseData> {
        self.call("permissions.createRole", &request).await
    }

    #[instrument(skip_all, fields(role = %request.role))]
    async fn get_role(&self, request: GetRoleRequest) -> Result<RoleData> {
        self.call("permissions.getRole", &request).await
    }

    #[instrument(skip_all, fields(role = %request.role))]
    async fn delete_role(&self, request: DeleteRoleRequest) -> Result<()> {
        self.call_empty("permissions.deleteRole", &request).await
    }

    #[instrument(skip_all, fields(external_id = %request.external_id))]
    async fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> Result<CreateIdentityResponseData> {
        self.call("identities.createIdentity", &request).await
    }

    #[instrument(skip_all, fields(identity = %request.identity))]
    async fn get_identity(&self, request: GetIdentityRequest) -> Result<IdentityData> {
        self.call("identities.getIdentity", &request).await
    }

    #[instrument(skip_all, fields(identity = %request.identity))]
    async fn update_identity(&self, request: UpdateIdentityRequest) -> Result<IdentityData> {
        self.call("identities.updateIdentity", &request).await
    }

    #[instrument(skip_all, fields(identity = %request.identity))]
    async fn delete_identity(&self, request: DeleteIdentityRequest) -> Result<()> {
        self.call_empty("identities.deleteIdentity", &request).await
    }
}
