use unkey_tfsdk::{AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfString, Value};

/// State of an `unkey_permission` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionModel {
    /// Permission id
    pub id: TfString,
    /// Display name
    pub name: TfString,
    /// Slug referenced by keys and roles
    pub slug: TfString,
    /// Description
    pub description: TfString,
}

impl AttrValue for PermissionModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("id", &self.id)
            .with("name", &self.name)
            .with("slug", &self.slug)
            .with("description", &self.description)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            id: reader.get("id")?,
            name: reader.get("name")?,
            slug: reader.get("slug")?,
            description: reader.get("description")?,
        })
    }
}
