//! The resource contract.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::diag::{Diagnostic, Diagnostics};
use crate::schema::Schema;
use crate::value::{ObjectValue, Value};

/// Opaque data handed from provider configure to every resource.
///
/// Resources downcast it to the client type they expect.
pub type ProviderData = Arc<dyn Any + Send + Sync>;

/// Constructor registered by a provider for one resource type.
pub type ResourceFactory = fn() -> Box<dyn Resource>;

/// Create request: the planned state.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Planned state
    pub plan: Value,
}

/// Read request: the last stored state.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// Current state
    pub state: Value,
}

/// Update request: the planned and prior states.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// Planned state
    pub plan: Value,
    /// Prior state
    pub state: Value,
}

/// Delete request: the last stored state.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    /// Current state
    pub state: Value,
}

/// Import request: the identifier given by the practitioner.
#[derive(Debug, Clone)]
pub struct ImportStateRequest {
    /// Remote identifier
    pub id: String,
}

/// Response of an operation producing state.
///
/// `state` is `None` when the operation failed; the host then keeps the
/// state it had before the operation.
#[derive(Debug, Clone, Default)]
pub struct ResourceResponse {
    /// New state to persist
    pub state: Option<Value>,
    /// Diagnostics
    pub diagnostics: Diagnostics,
}

impl ResourceResponse {
    /// A successful response.
    #[must_use]
    pub fn with_state(state: Value) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }

    /// A failed response.
    #[must_use]
    pub fn error(diagnostic: Diagnostic) -> Self {
        Self {
            state: None,
            diagnostics: Diagnostics::from(diagnostic),
        }
    }
}

impl From<Result<Value, Diagnostic>> for ResourceResponse {
    fn from(result: Result<Value, Diagnostic>) -> Self {
        match result {
            Ok(state) => Self::with_state(state),
            Err(diagnostic) => Self::error(diagnostic),
        }
    }
}

/// Response of a delete.
#[derive(Debug, Clone, Default)]
pub struct DeleteResponse {
    /// Diagnostics
    pub diagnostics: Diagnostics,
}

impl From<Result<(), Diagnostic>> for DeleteResponse {
    fn from(result: Result<(), Diagnostic>) -> Self {
        Self {
            diagnostics: result.err().map(Diagnostics::from).unwrap_or_default(),
        }
    }
}

/// A managed resource type.
///
/// The host drives each instance through create, read, update and delete.
/// Every operation reports failure through diagnostics, never by panicking.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Suffix appended to the provider type name, e.g. `key` for `unkey_key`.
    fn type_suffix(&self) -> &'static str;

    /// Full resource type name.
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_{}", self.type_suffix())
    }

    /// Resource schema.
    fn schema(&self) -> Schema;

    /// Receives the data produced by provider configure.
    ///
    /// `None` means the provider is not configured yet; implementations
    /// must treat it as a no-op.
    fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics;

    /// Creates the remote object and returns the resulting state.
    async fn create(&self, request: CreateRequest) -> ResourceResponse;

    /// Refreshes state from the remote object.
    async fn read(&self, request: ReadRequest) -> ResourceResponse;

    /// Applies an in-place change.
    async fn update(&self, request: UpdateRequest) -> ResourceResponse;

    /// Deletes the remote object.
    async fn delete(&self, request: DeleteRequest) -> DeleteResponse;

    /// Seeds state for `terraform import`; the host follows up with a read.
    async fn import_state(&self, request: ImportStateRequest) -> ResourceResponse {
        let state = ObjectValue::from_iter([("id", Value::String(request.id))]);
        ResourceResponse::with_state(state.into())
    }
}
