use unkey_tfsdk::{AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfString, Value};

/// State of an `unkey_role` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleModel {
    /// Role id
    pub id: TfString,
    /// Role name
    pub name: TfString,
    /// Description
    pub description: TfString,
}

impl AttrValue for RoleModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("id", &self.id)
            .with("name", &self.name)
            .with("description", &self.description)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            id: reader.get("id")?,
            name: reader.get("name")?,
            description: reader.get("description")?,
        })
    }
}
