use unkey_tfsdk::{AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfString, Value};

/// State of an `unkey_api` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiModel {
    /// API id
    pub id: TfString,
    /// Display name
    pub name: TfString,
}

impl AttrValue for ApiModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("id", &self.id)
            .with("name", &self.name)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            id: reader.get("id")?,
            name: reader.get("name")?,
        })
    }
}
