//! # unkey-tfsdk
//!
//! Host-facing building blocks for the Unkey Terraform provider.
//!
//! - [`value`]: three-state typed attributes ([`Attr`]) and the dynamic
//!   [`Value`] tree exchanged with the host
//! - [`diag`]: structured diagnostics
//! - [`schema`]: declarative schemas with validators and plan modifiers
//! - [`resource`] / [`provider`]: the traits a provider implements
//! - [`server`]: resource registry and configure fan-out
//!
//! The gRPC plugin transport is not part of this crate. A transport
//! decodes requests into [`Value`] payloads and calls into
//! [`ProviderServer`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diag;
pub mod path;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod server;
pub mod value;

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use path::{AttributePath, PathStep};
pub use provider::{ConfigureRequest, ConfigureResponse, Provider, ProviderMetadata};
pub use resource::{
    CreateRequest, DeleteRequest, DeleteResponse, ImportStateRequest, ProviderData, ReadRequest,
    Resource, ResourceFactory, ResourceResponse, UpdateRequest,
};
pub use schema::{Attribute, AttributeKind, PlanModifier, Schema, Validator};
pub use server::ProviderServer;
pub use value::{
    Attr, AttrValue, ObjectReader, ObjectValue, TfBool, TfInt64, TfList, TfObject, TfString, Value,
};
