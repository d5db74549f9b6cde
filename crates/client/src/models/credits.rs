use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often credits are topped up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefillInterval {
    /// Every day at midnight UTC
    Daily,
    /// Once a month, on `refill_day`
    Monthly,
}

impl RefillInterval {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RefillInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefillInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!(
                "unknown refill interval '{other}', expected 'daily' or 'monthly'"
            )),
        }
    }
}

/// Refill settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCreditsRefill {
    /// Refill cadence
    pub interval: RefillInterval,
    /// Credits restored on each refill
    pub amount: i64,
    /// Day of month for monthly refills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_day: Option<i64>,
}

/// Usage credits of a key. `remaining: null` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCreditsData {
    /// Remaining uses
    #[serde(default)]
    pub remaining: Option<i64>,
    /// Refill settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill: Option<KeyCreditsRefill>,
}

/// Credits in an update body.
///
/// Unlike [`KeyCreditsData`] an absent refill is sent as `null`, which
/// removes any refill configured before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateKeyCreditsData {
    /// Remaining uses, `null` for unlimited
    pub remaining: Option<i64>,
    /// Refill settings, `null` to remove
    pub refill: Option<KeyCreditsRefill>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_interval_parse() {
        assert_eq!("daily".parse::<RefillInterval>(), Ok(RefillInterval::Daily));
        assert_eq!(
            "monthly".parse::<RefillInterval>(),
            Ok(RefillInterval::Monthly)
        );
        assert!("weekly".parse::<RefillInterval>().is_err());
    }

    #[test]
    fn test_create_credits_omit_missing_refill() {
        let credits = KeyCreditsData {
            remaining: None,
            refill: None,
        };
        assert_eq!(serde_json::to_value(&credits).unwrap(), json!({"remaining": null}));
    }

    #[test]
    fn test_update_credits_send_null_refill() {
        let credits = UpdateKeyCreditsData {
            remaining: Some(10),
            refill: None,
        };
        assert_eq!(
            serde_json::to_value(&credits).unwrap(),
            json!({"remaining": 10, "refill": null})
        );
    }

    #[test]
    fn test_refill_day_camel_case() {
        let refill: KeyCreditsRefill =
            serde_json::from_value(json!({"interval": "monthly", "amount": 100, "refillDay": 15}))
                .unwrap();
        assert_eq!(refill.refill_day, Some(15));
        assert_eq!(refill.interval, RefillInterval::Monthly);
    }
}
