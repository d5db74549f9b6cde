//! Property-based tests for the plan <-> API converters.
//!
//! - Serialised metadata is a fixed point of parse-then-serialise
//! - Rate limits survive a trip through the API in order
//! - Credits survive a trip through the API

use proptest::prelude::*;
use terraform_provider_unkey::conversions::{
    credits_from_api, credits_to_api, map_to_string, ratelimits_from_api, ratelimits_to_api,
    string_list_to_vec, string_to_map, vec_to_string_list,
};
use terraform_provider_unkey::models::{CreditsModel, RatelimitModel, RefillModel};
use unkey_client::models::{Meta, RatelimitResponse};
use unkey_tfsdk::Attr;

// =============================================================================
// Strategies
// =============================================================================

fn meta_value_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<i64>().prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(serde_json::Value::from),
        proptest::collection::vec(any::<i32>(), 0..4).prop_map(serde_json::Value::from),
    ]
}

fn meta_strategy() -> impl Strategy<Value = Meta> {
    proptest::collection::btree_map("[a-z][a-z0-9_]{0,8}", meta_value_strategy(), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn ratelimit_strategy() -> impl Strategy<Value = RatelimitModel> {
    ("[a-z][a-z0-9_]{2,20}", 1..10_000_i64, 1_000..86_400_000_i64, any::<bool>()).prop_map(
        |(name, limit, duration, auto_apply)| RatelimitModel {
            name: Attr::Known(name),
            limit: Attr::Known(limit),
            duration: Attr::Known(duration),
            auto_apply: Attr::Known(auto_apply),
        },
    )
}

fn refill_strategy() -> impl Strategy<Value = Attr<RefillModel>> {
    prop_oneof![
        Just(Attr::Null),
        (1..1_000_i64).prop_map(|amount| Attr::Known(RefillModel {
            interval: Attr::Known("daily".into()),
            amount: Attr::Known(amount),
            refill_day: Attr::Null,
        })),
        (1..1_000_i64, 1..=31_i64).prop_map(|(amount, day)| Attr::Known(RefillModel {
            interval: Attr::Known("monthly".into()),
            amount: Attr::Known(amount),
            refill_day: Attr::Known(day),
        })),
    ]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn meta_serialisation_is_stable(meta in meta_strategy()) {
        let first = map_to_string(Some(&meta)).unwrap();
        if meta.is_empty() {
            prop_assert!(first.is_null());
        } else {
            let parsed = string_to_map(&first).unwrap();
            let second = map_to_string(parsed.as_ref()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn ratelimits_round_trip_in_order(
        models in proptest::collection::vec(ratelimit_strategy(), 1..8)
    ) {
        let requests = ratelimits_to_api(&Attr::Known(models.clone())).unwrap();
        let responses: Vec<RatelimitResponse> = requests
            .into_iter()
            .enumerate()
            .map(|(i, rl)| RatelimitResponse {
                id: format!("rl_{i}"),
                name: rl.name,
                limit: rl.limit,
                duration: rl.duration,
                auto_apply: rl.auto_apply,
            })
            .collect();
        prop_assert_eq!(ratelimits_from_api(&responses), Attr::Known(models));
    }

    #[test]
    fn credits_round_trip(
        remaining in proptest::option::of(0..1_000_000_i64),
        refill in refill_strategy(),
    ) {
        let plan = Attr::Known(CreditsModel {
            remaining: remaining.into(),
            refill,
        });
        let request = credits_to_api(&plan).unwrap();
        prop_assert_eq!(credits_from_api(request.as_ref()), plan);
    }

    #[test]
    fn non_empty_string_lists_round_trip(
        items in proptest::collection::vec("[a-z.]{1,16}", 1..10)
    ) {
        let list = vec_to_string_list(&items);
        prop_assert_eq!(string_list_to_vec(&list), Some(items));
    }
}
