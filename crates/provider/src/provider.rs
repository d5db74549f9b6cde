//! The `unkey` provider: configuration and resource registry.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, info, instrument};
use unkey_client::{ClientConfig, DEFAULT_BASE_URL, SharedClient, UnkeyClient};
use unkey_tfsdk::{
    AttrValue, Attribute, AttributePath, ConfigureRequest, ConfigureResponse, Diagnostic,
    ObjectReader, ObjectValue, Provider, ProviderData, ProviderMetadata, ResourceFactory, Schema,
    TfString, Value,
};

use crate::error::Error;
use crate::resources::{
    ApiResource, IdentityResource, KeyResource, PermissionResource, RoleResource,
};

/// Environment variable read when `root_key` is not configured.
pub const ROOT_KEY_ENV: &str = "UNKEY_ROOT_KEY";

/// Environment variable read when `api_url` is not configured.
pub const API_URL_ENV: &str = "UNKEY_API_URL";

/// Provider configuration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ProviderModel {
    root_key: TfString,
    api_url: TfString,
}

impl AttrValue for ProviderModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("root_key", &self.root_key)
            .with("api_url", &self.api_url)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            root_key: reader.get("root_key")?,
            api_url: reader.get("api_url")?,
        })
    }
}

/// Configured value, falling back to an environment variable. Empty strings
/// count as unset.
fn configured_or_env(value: &TfString, env: &str) -> Option<String> {
    value
        .known_str()
        .map(ToString::to_string)
        .or_else(|| std::env::var(env).ok())
        .filter(|s| !s.trim().is_empty())
}

fn unknown_attribute(name: &str, summary: &str, env: &str) -> Diagnostic {
    Diagnostic::error(
        summary,
        format!(
            "The provider cannot create the Unkey API client as there is an unknown \
             configuration value for the {name}. Either target apply the source of the \
             value first, set the value statically in the configuration, or use the \
             {env} environment variable."
        ),
    )
    .with_attribute(AttributePath::attribute_root(name))
}

/// Terraform provider for Unkey.
#[derive(Debug, Clone)]
pub struct UnkeyProvider {
    version: String,
}

impl UnkeyProvider {
    /// A provider reporting `version` to the host and in the user agent.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Resolves configuration and environment into client settings.
    fn client_config(&self, model: &ProviderModel) -> Result<ClientConfig, Diagnostic> {
        if model.root_key.is_unknown() {
            return Err(unknown_attribute(
                "root_key",
                "Unknown Unkey API Root Key",
                ROOT_KEY_ENV,
            ));
        }
        if model.api_url.is_unknown() {
            return Err(unknown_attribute(
                "api_url",
                "Unknown Unkey API URL",
                API_URL_ENV,
            ));
        }

        let root_key = configured_or_env(&model.root_key, ROOT_KEY_ENV).ok_or_else(|| {
            Diagnostic::error(
                "Missing Unkey API Root Key",
                format!(
                    "The provider cannot create the Unkey API client as there is a missing \
                     or empty value for the Unkey API root key. Set the root_key value in \
                     the configuration or use the {ROOT_KEY_ENV} environment variable. If \
                     either is already set, ensure the value is not empty."
                ),
            )
            .with_attribute(AttributePath::attribute_root("root_key"))
        })?;
        let api_url = configured_or_env(&model.api_url, API_URL_ENV)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(ClientConfig::new(SecretString::from(root_key))
            .with_base_url(api_url)
            .with_user_agent(format!("terraform-provider-unkey/{}", self.version)))
    }

    #[instrument(name = "unkey_provider_configure", skip_all)]
    fn build_client(&self, config: &Value) -> Result<SharedClient, Diagnostic> {
        let model: ProviderModel = config.decode()?;
        let client_config = self.client_config(&model)?;
        debug!(base_url = %client_config.base_url, "Creating Unkey client");

        let client = UnkeyClient::new(&client_config).map_err(|e| {
            Error::from(e).to_diagnostic("Unable to Create Unkey API Client")
        })?;
        info!(base_url = %client_config.base_url, "Configured Unkey client");
        Ok(Arc::new(client))
    }
}

impl Default for UnkeyProvider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl Provider for UnkeyProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: "unkey".to_string(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new("Manage Unkey APIs, keys, roles, permissions and identities.")
            .with_attribute(
                "root_key",
                Attribute::string().optional().sensitive().description(format!(
                    "Unkey root key used to authenticate API calls. May also be provided \
                     via the {ROOT_KEY_ENV} environment variable."
                )),
            )
            .with_attribute(
                "api_url",
                Attribute::string().optional().description(format!(
                    "Base URL of the Unkey API. Defaults to {DEFAULT_BASE_URL}. May also be \
                     provided via the {API_URL_ENV} environment variable."
                )),
            )
    }

    fn configure(&self, request: ConfigureRequest) -> ConfigureResponse {
        let mut response = ConfigureResponse::default();
        match self.build_client(&request.config) {
            Ok(client) => response.resource_data = Some(Arc::new(client) as ProviderData),
            Err(diagnostic) => response.diagnostics.push(diagnostic),
        }
        response
    }

    fn resources(&self) -> Vec<ResourceFactory> {
        vec![
            ApiResource::factory as ResourceFactory,
            KeyResource::factory as ResourceFactory,
            RoleResource::factory as ResourceFactory,
            PermissionResource::factory as ResourceFactory,
            IdentityResource::factory as ResourceFactory,
        ]
    }
}

#[cfg(test)]
mod tests {
    use unkey_tfsdk::Attr;

    use super::*;

    fn config(root_key: TfString, api_url: TfString) -> Value {
        ProviderModel { root_key, api_url }.to_value()
    }

    fn configure(config: Value) -> ConfigureResponse {
        UnkeyProvider::new("test").configure(ConfigureRequest { config })
    }

    #[test]
    fn test_root_key_from_config() {
        temp_env::with_vars_unset([ROOT_KEY_ENV, API_URL_ENV], || {
            let response = configure(config(Attr::Known("unkey_root".into()), Attr::Null));
            assert!(!response.diagnostics.has_error());
            let data = response.resource_data.unwrap();
            assert!(data.downcast_ref::<SharedClient>().is_some());
        });
    }

    #[test]
    fn test_root_key_from_env() {
        temp_env::with_vars(
            [
                (ROOT_KEY_ENV, Some("unkey_env_root")),
                (API_URL_ENV, Some("http://localhost:8080/")),
            ],
            || {
                let model = ProviderModel::default();
                let client_config = UnkeyProvider::new("1.2.3").client_config(&model).unwrap();
                assert_eq!(client_config.base_url, "http://localhost:8080");
                assert_eq!(client_config.user_agent, "terraform-provider-unkey/1.2.3");
            },
        );
    }

    #[test]
    fn test_null_config_block_uses_environment() {
        temp_env::with_var(ROOT_KEY_ENV, Some("unkey_env_root"), || {
            let response = configure(Value::Null);
            assert!(!response.diagnostics.has_error());
            assert!(response.resource_data.is_some());
        });
    }

    #[test]
    fn test_missing_root_key() {
        temp_env::with_var_unset(ROOT_KEY_ENV, || {
            let response = configure(config(Attr::Known(String::new()), Attr::Null));
            let diag = response.diagnostics.iter().next().unwrap();
            assert_eq!(diag.summary, "Missing Unkey API Root Key");
            assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "root_key");
            assert!(response.resource_data.is_none());
        });
    }

    #[test]
    fn test_unknown_root_key() {
        let response = configure(config(Attr::Unknown, Attr::Null));
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Unknown Unkey API Root Key");
    }

    #[test]
    fn test_invalid_api_url() {
        temp_env::with_var_unset(API_URL_ENV, || {
            let response = configure(config(
                Attr::Known("unkey_root".into()),
                Attr::Known("ftp://unkey.example".into()),
            ));
            let diag = response.diagnostics.iter().next().unwrap();
            assert_eq!(diag.summary, "Unable to Create Unkey API Client");
        });
    }

    #[test]
    fn test_registers_every_resource() {
        let server = unkey_tfsdk::ProviderServer::new(UnkeyProvider::new("test"));
        assert_eq!(
            server.resource_types().collect::<Vec<_>>(),
            [
                "unkey_api",
                "unkey_identity",
                "unkey_key",
                "unkey_permission",
                "unkey_role"
            ]
        );
        assert!(server.provider_schema().attribute("root_key").unwrap().sensitive);
    }
}
