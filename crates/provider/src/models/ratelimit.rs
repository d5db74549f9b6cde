use unkey_tfsdk::{
    AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfBool, TfInt64, TfString,
    Value,
};

/// One element of a `ratelimits` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatelimitModel {
    /// Name, unique within the list
    pub name: TfString,
    /// Requests per window
    pub limit: TfInt64,
    /// Window in milliseconds
    pub duration: TfInt64,
    /// Apply on every verification
    pub auto_apply: TfBool,
}

impl AttrValue for RatelimitModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("name", &self.name)
            .with("limit", &self.limit)
            .with("duration", &self.duration)
            .with("auto_apply", &self.auto_apply)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            name: reader.get("name")?,
            limit: reader.get("limit")?,
            duration: reader.get("duration")?,
            auto_apply: reader.get("auto_apply")?,
        })
    }
}
