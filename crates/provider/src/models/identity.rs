use unkey_tfsdk::{
    AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfList, TfString, Value,
};

use super::RatelimitModel;

/// State of an `unkey_identity` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityModel {
    /// Identity id
    pub id: TfString,
    /// Id of the user or organisation in the caller's system
    pub external_id: TfString,
    /// Metadata as a JSON object string
    pub meta: TfString,
    /// Rate limits shared by the identity's keys
    pub ratelimits: TfList<RatelimitModel>,
}

impl AttrValue for IdentityModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("id", &self.id)
            .with("external_id", &self.external_id)
            .with("meta", &self.meta)
            .with("ratelimits", &self.ratelimits)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            id: reader.get("id")?,
            external_id: reader.get("external_id")?,
            meta: reader.get("meta")?,
            ratelimits: reader.get("ratelimits")?,
        })
    }
}
