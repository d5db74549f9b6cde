use unkey_tfsdk::{
    AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfBool, TfInt64, TfList,
    TfObject, TfString, Value,
};

use super::{CreditsModel, RatelimitModel};

/// State of an `unkey_key` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyModel {
    /// Key id
    pub id: TfString,
    /// Plaintext key, known only after create
    pub key: TfString,
    /// Owning API
    pub api_id: TfString,
    /// Key prefix
    pub prefix: TfString,
    /// Display name
    pub name: TfString,
    /// Random bytes in the key
    pub byte_length: TfInt64,
    /// External id of the linked identity
    pub external_id: TfString,
    /// Metadata as a JSON object string
    pub meta: TfString,
    /// Role names
    pub roles: TfList<String>,
    /// Permission slugs
    pub permissions: TfList<String>,
    /// Expiry, unix milliseconds
    pub expires: TfInt64,
    /// Usage credits
    pub credits: TfObject<CreditsModel>,
    /// Rate limits
    pub ratelimits: TfList<RatelimitModel>,
    /// Whether the key verifies
    pub enabled: TfBool,
    /// Store the key encrypted for later retrieval
    pub recoverable: TfBool,
    /// Hard delete instead of soft delete
    pub permanent_deletion: TfBool,
    /// Timestamp of the last create or update
    pub last_updated: TfString,
}

impl AttrValue for KeyModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("id", &self.id)
            .with("key", &self.key)
            .with("api_id", &self.api_id)
            .with("prefix", &self.prefix)
            .with("name", &self.name)
            .with("byte_length", &self.byte_length)
            .with("external_id", &self.external_id)
            .with("meta", &self.meta)
            .with("roles", &self.roles)
            .with("permissions", &self.permissions)
            .with("expires", &self.expires)
            .with("credits", &self.credits)
            .with("ratelimits", &self.ratelimits)
            .with("enabled", &self.enabled)
            .with("recoverable", &self.recoverable)
            .with("permanent_deletion", &self.permanent_deletion)
            .with("last_updated", &self.last_updated)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            id: reader.get("id")?,
            key: reader.get("key")?,
            api_id: reader.get("api_id")?,
            prefix: reader.get("prefix")?,
            name: reader.get("name")?,
            byte_length: reader.get("byte_length")?,
            external_id: reader.get("external_id")?,
            meta: reader.get("meta")?,
            roles: reader.get("roles")?,
            permissions: reader.get("permissions")?,
            expires: reader.get("expires")?,
            credits: reader.get("credits")?,
            ratelimits: reader.get("ratelimits")?,
            enabled: reader.get("enabled")?,
            recoverable: reader.get("recoverable")?,
            permanent_deletion: reader.get("permanent_deletion")?,
            last_updated: reader.get("last_updated")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_read_as_null() {
        let value: Value = ObjectValue::from_iter([("id", Value::from("key_1"))]).into();
        let model: KeyModel = value.decode().unwrap();
        assert_eq!(model.id.known_str(), Some("key_1"));
        assert!(model.credits.is_null());
        assert!(model.roles.is_null());
    }

    #[test]
    fn test_nested_type_mismatch_reports_path() {
        let mut object = ObjectValue::new();
        object.insert("ratelimits", Value::List(vec![Value::from("oops")]));
        let value = Value::from(object);
        let err = value.decode::<KeyModel>().unwrap_err();
        assert_eq!(
            err.attribute.map(|p| p.to_string()).as_deref(),
            Some("ratelimits[0]")
        );
    }
}
