//! The provider contract.

use crate::diag::Diagnostics;
use crate::resource::{ProviderData, ResourceFactory};
use crate::schema::Schema;
use crate::value::Value;

/// Provider identity reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Type name prefix for every resource, e.g. `unkey`
    pub type_name: String,
    /// Provider version
    pub version: String,
}

/// Provider configure request.
#[derive(Debug, Clone)]
pub struct ConfigureRequest {
    /// The provider configuration block
    pub config: Value,
}

/// Provider configure response.
#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    /// Data passed on to every resource's configure step
    pub resource_data: Option<ProviderData>,
    /// Diagnostics
    pub diagnostics: Diagnostics,
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("metadata", &self.metadata())
            .finish_non_exhaustive()
    }
}

/// A Terraform provider: configuration plus a registry of resources.
pub trait Provider: Send + Sync {
    /// Type name and version.
    fn metadata(&self) -> ProviderMetadata;

    /// Schema of the provider configuration block.
    fn schema(&self) -> Schema;

    /// Validates configuration and builds the data shared with resources.
    fn configure(&self, request: ConfigureRequest) -> ConfigureResponse;

    /// Constructors for every resource type the provider exposes.
    fn resources(&self) -> Vec<ResourceFactory>;
}
