use unkey_client::models::{RatelimitRequest, RatelimitResponse};
use unkey_tfsdk::{Attr, TfList};

use crate::models::RatelimitModel;

/// Request bodies for a planned `ratelimits` list.
///
/// Null or unknown yields `None`. Element fields left null fall back to
/// zero values; the schema marks all of them required.
#[must_use]
pub fn ratelimits_to_api(list: &TfList<RatelimitModel>) -> Option<Vec<RatelimitRequest>> {
    let models = list.known()?;
    Some(
        models
            .iter()
            .map(|model| RatelimitRequest {
                name: model.name.known_str().unwrap_or_default().to_string(),
                limit: model.limit.known().copied().unwrap_or_default(),
                duration: model.duration.known().copied().unwrap_or_default(),
                auto_apply: model.auto_apply.value_bool(),
            })
            .collect(),
    )
}

/// List attribute from API rate limits, keeping API order. Empty becomes
/// null.
#[must_use]
pub fn ratelimits_from_api(ratelimits: &[RatelimitResponse]) -> TfList<RatelimitModel> {
    if ratelimits.is_empty() {
        return Attr::Null;
    }
    Attr::Known(
        ratelimits
            .iter()
            .map(|rl| RatelimitModel {
                name: Attr::Known(rl.name.clone()),
                limit: Attr::Known(rl.limit),
                duration: Attr::Known(rl.duration),
                auto_apply: Attr::Known(rl.auto_apply),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, limit: i64, duration: i64, auto_apply: bool) -> RatelimitModel {
        RatelimitModel {
            name: Attr::Known(name.into()),
            limit: Attr::Known(limit),
            duration: Attr::Known(duration),
            auto_apply: Attr::Known(auto_apply),
        }
    }

    #[test]
    fn test_null_and_unknown_are_absent() {
        assert_eq!(ratelimits_to_api(&Attr::Null), None);
        assert_eq!(ratelimits_to_api(&Attr::Unknown), None);
    }

    #[test]
    fn test_to_api_maps_fields() {
        let list = Attr::Known(vec![model("requests", 100, 60_000, true)]);
        assert_eq!(
            ratelimits_to_api(&list),
            Some(vec![RatelimitRequest {
                name: "requests".into(),
                limit: 100,
                duration: 60_000,
                auto_apply: true,
            }])
        );
    }

    #[test]
    fn test_null_auto_apply_reads_false() {
        let mut rl = model("tokens", 5, 1000, true);
        rl.auto_apply = Attr::Null;
        let requests = ratelimits_to_api(&Attr::Known(vec![rl])).unwrap();
        assert!(!requests[0].auto_apply);
    }

    #[test]
    fn test_from_api_preserves_order_and_empty_is_null() {
        assert_eq!(ratelimits_from_api(&[]), Attr::Null);

        let responses = vec![
            RatelimitResponse {
                id: "rl_2".into(),
                name: "b".into(),
                limit: 2,
                duration: 2000,
                auto_apply: false,
            },
            RatelimitResponse {
                id: "rl_1".into(),
                name: "a".into(),
                limit: 1,
                duration: 1000,
                auto_apply: true,
            },
        ];
        assert_eq!(
            ratelimits_from_api(&responses),
            Attr::Known(vec![model("b", 2, 2000, false), model("a", 1, 1000, true)])
        );
    }
}
