//! Resource registry and dispatch.
//!
//! [`ProviderServer`] instantiates every resource a provider registers,
//! runs provider configure once and hands the resulting data to each
//! resource. The host transport sits on top of it and routes requests by
//! resource type name.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::diag::{Diagnostic, Diagnostics};
use crate::provider::{ConfigureRequest, Provider};
use crate::resource::Resource;
use crate::schema::Schema;
use crate::value::Value;

/// Owns a provider and its resource instances.
pub struct ProviderServer {
    provider: Box<dyn Provider>,
    resources: BTreeMap<String, Box<dyn Resource>>,
    configured: bool,
}

impl std::fmt::Debug for ProviderServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderServer")
            .field("provider", &self.provider)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("configured", &self.configured)
            .finish()
    }
}

impl ProviderServer {
    /// Instantiates every registered resource.
    #[must_use]
    pub fn new(provider: impl Provider + 'static) -> Self {
        let provider: Box<dyn Provider> = Box::new(provider);
        let type_name = provider.metadata().type_name;
        let resources = provider
            .resources()
            .into_iter()
            .map(|factory| {
                let resource = factory();
                (resource.type_name(&type_name), resource)
            })
            .collect();

        Self {
            provider,
            resources,
            configured: false,
        }
    }

    /// Configures the provider and passes the result to every resource.
    ///
    /// Resources are left unconfigured when provider configure reports an
    /// error.
    #[instrument(name = "provider_server_configure", skip_all)]
    pub fn configure(&mut self, config: Value) -> Diagnostics {
        let response = self.provider.configure(ConfigureRequest { config });
        let mut diags = response.diagnostics;
        if diags.has_error() {
            return diags;
        }

        for (type_name, resource) in &self.resources {
            debug!(resource = %type_name, "Configuring resource");
            diags.append(resource.configure(response.resource_data.as_ref()));
        }
        self.configured = !diags.has_error();
        diags
    }

    /// Whether configure completed without errors.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Provider configuration schema.
    #[must_use]
    pub fn provider_schema(&self) -> Schema {
        self.provider.schema()
    }

    /// Schemas of every resource type, keyed by type name.
    #[must_use]
    pub fn resource_schemas(&self) -> BTreeMap<String, Schema> {
        self.resources
            .iter()
            .map(|(name, resource)| (name.clone(), resource.schema()))
            .collect()
    }

    /// Registered resource type names.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Looks up a resource by type name.
    pub fn resource(&self, type_name: &str) -> Result<&dyn Resource, Diagnostic> {
        self.resources
            .get(type_name)
            .map(Box::as_ref)
            .ok_or_else(|| {
                Diagnostic::error(
                    "Unknown Resource Type",
                    format!("The provider does not implement the resource type {type_name}."),
                )
            })
    }
}
