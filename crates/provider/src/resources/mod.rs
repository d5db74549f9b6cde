//! Resource handlers.
//!
//! Each handler decodes the host payload into its model, runs the
//! converters, performs the API calls and encodes the refreshed model back.
//! Failures never panic; they surface as diagnostics and leave the prior
//! state untouched.

use std::fmt::Display;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;
use unkey_client::SharedClient;
use unkey_client::models::Meta;
use unkey_tfsdk::{
    AttributePath, DeleteResponse, Diagnostic, Diagnostics, ProviderData, ResourceResponse,
    TfString, Value,
};

use crate::conversions::{map_to_string, string_to_map};

mod api;
mod identity;
mod key;
mod permission;
mod role;

pub use api::ApiResource;
pub use identity::IdentityResource;
pub use key::KeyResource;
pub use permission::PermissionResource;
pub use role::RoleResource;

/// Holds the client a resource receives from provider configure.
#[derive(Default)]
pub(crate) struct ClientSlot {
    client: RwLock<Option<SharedClient>>,
}

impl std::fmt::Debug for ClientSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSlot")
            .field("configured", &self.client.read().is_some())
            .finish()
    }
}

impl ClientSlot {
    pub(crate) fn with_client(client: SharedClient) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }

    /// Stores the client carried by `provider_data`.
    ///
    /// `None` is the host calling before provider configure and is ignored.
    pub(crate) fn configure(&self, provider_data: Option<&ProviderData>) -> Diagnostics {
        let Some(data) = provider_data else {
            return Diagnostics::new();
        };
        match data.downcast_ref::<SharedClient>() {
            Some(client) => {
                *self.client.write() = Some(Arc::clone(client));
                Diagnostics::new()
            }
            None => Diagnostics::from(Diagnostic::error(
                "Unexpected Resource Configure Type",
                "Expected an Unkey client handle as provider data. \
                 Please report this issue to the provider developers.",
            )),
        }
    }

    pub(crate) fn get(&self) -> Result<SharedClient, Diagnostic> {
        self.client.read().clone().ok_or_else(|| {
            Diagnostic::error(
                "Unconfigured Unkey Client",
                "The resource was used before the provider was configured. \
                 Please report this issue to the provider developers.",
            )
        })
    }
}

/// Diagnostic for a failed API call.
pub(crate) fn api_error(
    summary: &str,
    context: impl Display,
    err: &unkey_client::Error,
) -> Diagnostic {
    Diagnostic::error(summary, format!("{context}: {err}"))
}

/// Id of an existing remote object, taken from state.
pub(crate) fn state_id(id: &TfString, entity: &str) -> Result<String, Diagnostic> {
    id.known_str().map(ToString::to_string).ok_or_else(|| {
        Diagnostic::error(
            "Missing Resource Identifier",
            format!("The {entity} state has no id. Import the resource or recreate it."),
        )
        .with_attribute(AttributePath::attribute_root("id"))
    })
}

/// Parses the `meta` attribute.
pub(crate) fn meta_to_api(meta: &TfString) -> Result<Option<Meta>, Diagnostic> {
    string_to_map(meta).map_err(|e| {
        e.to_attribute_diagnostic("Invalid JSON in meta", AttributePath::attribute_root("meta"))
    })
}

fn non_empty(meta: Option<Meta>) -> Option<Meta> {
    meta.filter(|m| !m.is_empty())
}

/// Whether the planned `meta` holds a different JSON object than state.
///
/// Key order and whitespace are ignored. An unknown plan never differs.
pub(crate) fn meta_differs(plan: &TfString, state: &TfString) -> bool {
    if plan.is_unknown() {
        return false;
    }
    match (string_to_map(plan), string_to_map(state)) {
        (Ok(planned), Ok(stored)) => non_empty(planned) != non_empty(stored),
        _ => plan != state,
    }
}

/// `meta` for state from the object Unkey returned.
///
/// The current string is kept as written when it parses to the same object.
pub(crate) fn meta_from_api(
    current: &TfString,
    remote: Option<&Meta>,
) -> Result<TfString, Diagnostic> {
    let remote = remote.filter(|m| !m.is_empty());
    let same = current.is_known()
        && string_to_map(current).is_ok_and(|parsed| non_empty(parsed).as_ref() == remote);
    if same {
        return Ok(current.clone());
    }
    map_to_string(remote).map_err(|e| {
        e.to_attribute_diagnostic(
            "Invalid meta returned by Unkey",
            AttributePath::attribute_root("meta"),
        )
    })
}

/// Turns an operation result into a response, logging failures.
pub(crate) fn respond(
    type_name: &str,
    operation: &str,
    result: Result<Value, Diagnostic>,
) -> ResourceResponse {
    if let Err(diag) = &result {
        warn!(resource = type_name, operation, error = %diag, "Resource operation failed");
    }
    ResourceResponse::from(result)
}

/// Same as [`respond`] for deletes.
pub(crate) fn respond_delete(type_name: &str, result: Result<(), Diagnostic>) -> DeleteResponse {
    if let Err(diag) = &result {
        warn!(
            resource = type_name,
            operation = "delete",
            error = %diag,
            "Resource operation failed"
        );
    }
    DeleteResponse::from(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeUnkey;

    #[test]
    fn test_slot_ignores_missing_provider_data() {
        let slot = ClientSlot::default();
        assert!(slot.configure(None).is_empty());
        let err = slot.get().unwrap_err();
        assert_eq!(err.summary, "Unconfigured Unkey Client");
    }

    #[test]
    fn test_slot_rejects_foreign_provider_data() {
        let slot = ClientSlot::default();
        let data: ProviderData = Arc::new("not a client".to_string());
        let diags = slot.configure(Some(&data));
        assert!(diags.has_error());
        assert_eq!(
            diags.iter().next().unwrap().summary,
            "Unexpected Resource Configure Type"
        );
    }

    #[test]
    fn test_slot_accepts_shared_client() {
        let (_, client) = FakeUnkey::shared();
        let slot = ClientSlot::default();
        let data: ProviderData = Arc::new(client);
        assert!(!slot.configure(Some(&data)).has_error());
        assert!(slot.get().is_ok());
    }

    #[test]
    fn test_state_id_requires_known_id() {
        assert_eq!(
            state_id(&TfString::Known("key_1".into()), "key").unwrap(),
            "key_1"
        );
        let diag = state_id(&TfString::Null, "key").unwrap_err();
        assert_eq!(diag.attribute.unwrap().to_string(), "id");
    }

    #[test]
    fn test_invalid_meta_reports_attribute() {
        let diag = meta_to_api(&TfString::Known("{oops".into())).unwrap_err();
        assert_eq!(diag.summary, "Invalid JSON in meta");
        assert_eq!(diag.attribute.unwrap().to_string(), "meta");
    }

    fn meta(json: &str) -> TfString {
        TfString::Known(json.into())
    }

    fn remote(json: serde_json::Value) -> Meta {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_meta_differs_ignores_formatting() {
        let written = meta(r#"{"tier": "pro", "a": 1}"#);
        let stored = meta(r#"{"a":1,"tier":"pro"}"#);
        assert!(!meta_differs(&written, &stored));
        assert!(meta_differs(&meta(r#"{"tier": "free"}"#), &stored));
        assert!(meta_differs(&TfString::Null, &stored));
        assert!(!meta_differs(&TfString::Unknown, &stored));
        assert!(!meta_differs(&meta("{}"), &TfString::Null));
    }

    #[test]
    fn test_meta_differs_on_invalid_json() {
        assert!(meta_differs(&meta("{oops"), &meta(r#"{"a":1}"#)));
        assert!(!meta_differs(&meta("{oops"), &meta("{oops")));
    }

    #[test]
    fn test_meta_from_api_keeps_written_string() {
        let written = meta(r#"{"tier": "pro", "a": 1}"#);
        let same = remote(serde_json::json!({"a": 1, "tier": "pro"}));
        assert_eq!(meta_from_api(&written, Some(&same)).unwrap(), written);

        let other = remote(serde_json::json!({"tier": "enterprise"}));
        assert_eq!(
            meta_from_api(&written, Some(&other)).unwrap(),
            meta(r#"{"tier":"enterprise"}"#)
        );
        assert!(meta_from_api(&written, None).unwrap().is_null());
        assert!(meta_from_api(&TfString::Null, None).unwrap().is_null());
    }
}
