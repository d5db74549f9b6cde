use serde::{Deserialize, Serialize};

use super::Meta;
use super::credits::{KeyCreditsData, UpdateKeyCreditsData};
use super::ratelimit::{RatelimitRequest, RatelimitResponse};

/// `keys.createKey` body. Unset options are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyRequest {
    /// Owning API
    pub api_id: String,
    /// Prefix prepended to the generated key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Random bytes in the key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<i64>,
    /// Identity to link, created on the fly when missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Free-form metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Role names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Permission slugs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Expiry as unix milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
    /// Usage credits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<KeyCreditsData>,
    /// Rate limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimits: Option<Vec<RatelimitRequest>>,
    /// Whether the key verifies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Store the key encrypted so it can be retrieved later
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recoverable: Option<bool>,
}

/// `keys.createKey` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyResponseData {
    /// Key id
    pub key_id: String,
    /// Plaintext key, returned only here
    pub key: String,
}

/// `keys.getKey` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetKeyRequest {
    /// Key id
    pub key_id: String,
    /// Ask for the plaintext of a recoverable key
    pub decrypt: bool,
}

/// Identity linked to a key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIdentity {
    /// Identity id
    pub id: String,
    /// External id
    pub external_id: String,
    /// Identity metadata
    #[serde(default)]
    pub meta: Option<Meta>,
    /// Identity rate limits
    #[serde(default)]
    pub ratelimits: Vec<RatelimitResponse>,
}

/// `keys.getKey` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    /// Key id
    pub key_id: String,
    /// First characters of the key
    #[serde(default)]
    pub start: String,
    /// Whether the key verifies
    #[serde(default)]
    pub enabled: bool,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Metadata
    #[serde(default)]
    pub meta: Option<Meta>,
    /// Expiry as unix milliseconds
    #[serde(default)]
    pub expires: Option<i64>,
    /// Usage credits
    #[serde(default)]
    pub credits: Option<KeyCreditsData>,
    /// Linked identity
    #[serde(default)]
    pub identity: Option<KeyIdentity>,
    /// Role names
    #[serde(default)]
    pub roles: Vec<String>,
    /// Permission slugs
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Rate limits
    #[serde(default)]
    pub ratelimits: Vec<RatelimitResponse>,
}

/// `keys.updateKey` body.
///
/// Only fields that are `Some` are sent. For the nullable fields an inner
/// `None` is sent as an explicit `null`, which clears the value remotely.
/// An empty list for roles, permissions or ratelimits removes them all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKeyRequest {
    /// Key id
    pub key_id: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// External id of the linked identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<Option<String>>,
    /// Metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Option<Meta>>,
    /// Expiry as unix milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<Option<i64>>,
    /// Usage credits, `null` for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<Option<UpdateKeyCreditsData>>,
    /// Whether the key verifies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Role names, replacing the current set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Permission slugs, replacing the current set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Rate limits, replacing the current set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimits: Option<Vec<RatelimitRequest>>,
}

impl UpdateKeyRequest {
    /// An update that changes nothing yet.
    #[must_use]
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            ..Self::default()
        }
    }

    /// Whether any field besides the key id is set.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.external_id.is_some()
            || self.meta.is_some()
            || self.expires.is_some()
            || self.credits.is_some()
            || self.enabled.is_some()
            || self.roles.is_some()
            || self.permissions.is_some()
            || self.ratelimits.is_some()
    }
}

/// `keys.deleteKey` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteKeyRequest {
    /// Key id
    pub key_id: String,
    /// Remove the key for good instead of soft deleting it
    pub permanent: bool,
}
