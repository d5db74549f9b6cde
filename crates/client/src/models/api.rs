use serde::{Deserialize, Serialize};

/// `apis.createApi` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateApiRequest {
    /// Display name
    pub name: String,
}

/// `apis.createApi` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiResponseData {
    /// New API id
    pub api_id: String,
}

/// `apis.getApi` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiRequest {
    /// API id
    pub api_id: String,
}

/// `apis.getApi` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiData {
    /// API id
    pub id: String,
    /// Display name
    pub name: String,
}

/// `apis.deleteApi` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiRequest {
    /// API id
    pub api_id: String,
}
