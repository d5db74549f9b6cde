use unkey_tfsdk::{
    AttrValue, AttributePath, Diagnostic, ObjectReader, ObjectValue, TfInt64, TfObject, TfString,
    Value,
};

/// The `credits` block of a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditsModel {
    /// Remaining uses; null means unlimited
    pub remaining: TfInt64,
    /// Automatic top-up
    pub refill: TfObject<RefillModel>,
}

/// The `credits.refill` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefillModel {
    /// `daily` or `monthly`
    pub interval: TfString,
    /// Credits restored per refill
    pub amount: TfInt64,
    /// Day of month, monthly refills only
    pub refill_day: TfInt64,
}

impl AttrValue for CreditsModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("remaining", &self.remaining)
            .with("refill", &self.refill)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            remaining: reader.get("remaining")?,
            refill: reader.get("refill")?,
        })
    }
}

impl AttrValue for RefillModel {
    fn to_value(&self) -> Value {
        ObjectValue::new()
            .with("interval", &self.interval)
            .with("amount", &self.amount)
            .with("refill_day", &self.refill_day)
            .into()
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        let reader = ObjectReader::new(value, path)?;
        Ok(Self {
            interval: reader.get("interval")?,
            amount: reader.get("amount")?,
            refill_day: reader.get("refill_day")?,
        })
    }
}
