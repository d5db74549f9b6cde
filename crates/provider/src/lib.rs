//! # terraform-provider-unkey
//!
//! Terraform provider managing [Unkey](https://unkey.com) resources:
//!
//! - `unkey_api`: a namespace keys are issued under
//! - `unkey_key`: an API key with credits, ratelimits, roles and permissions
//! - `unkey_role` / `unkey_permission`: RBAC building blocks
//! - `unkey_identity`: a user or organisation shared across keys
//!
//! [`UnkeyProvider`] resolves the root key and builds one client that every
//! resource shares. [`server`] wraps it in a
//! [`ProviderServer`](unkey_tfsdk::ProviderServer) for a host transport to
//! drive.
//!
//! ```rust,no_run
//! use terraform_provider_unkey::server;
//! use unkey_tfsdk::Value;
//!
//! let mut server = server(env!("CARGO_PKG_VERSION"));
//! // Reads UNKEY_ROOT_KEY when the block does not set root_key.
//! let diags = server.configure(Value::Null);
//! assert!(!diags.has_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod conversions;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod resources;
pub mod schemas;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use provider::{API_URL_ENV, ROOT_KEY_ENV, UnkeyProvider};
pub use resources::{ApiResource, IdentityResource, KeyResource, PermissionResource, RoleResource};

/// A server hosting the provider and all of its resources.
#[must_use]
pub fn server(version: impl Into<String>) -> unkey_tfsdk::ProviderServer {
    unkey_tfsdk::ProviderServer::new(UnkeyProvider::new(version))
}
