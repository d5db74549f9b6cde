use serde::{Deserialize, Serialize};

use super::Meta;
use super::ratelimit::{RatelimitRequest, RatelimitResponse};

/// `identities.createIdentity` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdentityRequest {
    /// Id of the user or organisation in the caller's system
    pub external_id: String,
    /// Metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Rate limits shared by every key of the identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimits: Option<Vec<RatelimitRequest>>,
}

/// `identities.createIdentity` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdentityResponseData {
    /// New identity id
    pub identity_id: String,
}

/// `identities.getIdentity` body. The API accepts an id or an external id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetIdentityRequest {
    /// Identity id or external id
    pub identity: String,
}

/// `identities.getIdentity` and `identities.updateIdentity` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityData {
    /// Identity id
    pub id: String,
    /// External id
    pub external_id: String,
    /// Metadata
    #[serde(default)]
    pub meta: Option<Meta>,
    /// Rate limits
    #[serde(default)]
    pub ratelimits: Vec<RatelimitResponse>,
}

/// `identities.updateIdentity` body.
///
/// `meta: Some(None)` clears the metadata; `ratelimits: Some(vec![])`
/// removes every rate limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateIdentityRequest {
    /// Identity id or external id
    pub identity: String,
    /// Metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Option<Meta>>,
    /// Rate limits, replacing the current set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimits: Option<Vec<RatelimitRequest>>,
}

impl UpdateIdentityRequest {
    /// An update that changes nothing yet.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            ..Self::default()
        }
    }

    /// Whether any field besides the identity is set.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.meta.is_some() || self.ratelimits.is_some()
    }
}

/// `identities.deleteIdentity` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteIdentityRequest {
    /// Identity id or external id
    pub identity: String,
}
