use unkey_tfsdk::{Attribute, PlanModifier, Schema, Validator};

use super::id_attribute;
use super::ratelimit::ratelimits_attribute;

/// Latest accepted expiry: 2100-01-01T00:00:00Z in milliseconds.
const MAX_EXPIRES_MS: i64 = 4_102_444_800_000;

fn credits_attribute() -> Attribute {
    Attribute::single_nested([
        (
            "remaining",
            Attribute::int64()
                .required()
                .description("Uses left before verification fails."),
        ),
        (
            "refill",
            Attribute::single_nested([
                (
                    "interval",
                    Attribute::string()
                        .required()
                        .description("`daily` or `monthly`.")
                        .validator(Validator::StringOneOf(&["daily", "monthly"])),
                ),
                (
                    "amount",
                    Attribute::int64()
                        .required()
                        .description("Credits restored on each refill.")
                        .validator(Validator::Int64AtLeast(1)),
                ),
                (
                    "refill_day",
                    Attribute::int64()
                        .optional()
                        .description("Day of the month for monthly refills.")
                        .validator(Validator::Int64Between(1, 31)),
                ),
            ])
            .optional()
            .description("Automatic top-up of `remaining`."),
        ),
    ])
    .optional()
    .description("Usage credits. Leave unset for unlimited use.")
}

/// Schema of `unkey_key`.
#[must_use]
pub fn key_schema() -> Schema {
    Schema::new(
        "Manages an API key. The plaintext key is only available right after creation \
         and is kept in state from then on.",
    )
    .with_attribute(
        "id",
        id_attribute("Key id used for management calls. Not secret."),
    )
    .with_attribute(
        "key",
        Attribute::string()
            .computed()
            .sensitive()
            .description("The plaintext key. Returned once by create.")
            .plan_modifier(PlanModifier::UseStateForUnknown),
    )
    .with_attribute(
        "api_id",
        Attribute::string()
            .required()
            .description("API the key belongs to.")
            .validator(Validator::StringLengthBetween(3, 255))
            .plan_modifier(PlanModifier::RequiresReplace),
    )
    .with_attribute(
        "prefix",
        Attribute::string()
            .optional()
            .description("Prefix prepended to the key, e.g. `sk_live`.")
            .validator(Validator::StringLengthBetween(1, 16))
            .plan_modifier(PlanModifier::RequiresReplace),
    )
    .with_attribute(
        "name",
        Attribute::string()
            .optional()
            .description("Display name shown in the dashboard.")
            .validator(Validator::StringLengthBetween(1, 255)),
    )
    .with_attribute(
        "byte_length",
        Attribute::int64()
            .required()
            .description("Random bytes in the key; more bytes means more entropy.")
            .validator(Validator::Int64Between(16, 255))
            .plan_modifier(PlanModifier::RequiresReplace),
    )
    .with_attribute(
        "external_id",
        Attribute::string()
            .optional()
            .description("Links the key to an identity, created on demand.")
            .validator(Validator::StringLengthBetween(1, 255)),
    )
    .with_attribute(
        "meta",
        Attribute::string()
            .optional()
            .description("JSON object returned on verification."),
    )
    .with_attribute(
        "roles",
        Attribute::string_list()
            .optional()
            .description("Role names granted to the key.")
            .validator(Validator::ListSizeAtMost(100))
            .validator(Validator::ListValueStringsLengthBetween(1, 100)),
    )
    .with_attribute(
        "permissions",
        Attribute::string_list()
            .optional()
            .description("Permission slugs granted directly to the key.")
            .validator(Validator::ListSizeAtMost(1000)),
    )
    .with_attribute(
        "expires",
        Attribute::int64()
            .optional()
            .description("Expiry as unix milliseconds.")
            .validator(Validator::Int64Between(0, MAX_EXPIRES_MS)),
    )
    .with_attribute("credits", credits_attribute())
    .with_attribute(
        "ratelimits",
        ratelimits_attribute("Rate limits enforced on this key."),
    )
    .with_attribute(
        "enabled",
        Attribute::bool()
            .optional()
            .computed()
            .description("Disabled keys fail verification. Defaults to true.")
            .plan_modifier(PlanModifier::UseStateForUnknown),
    )
    .with_attribute(
        "recoverable",
        Attribute::bool()
            .optional()
            .description("Store the key encrypted so it can be retrieved later.")
            .plan_modifier(PlanModifier::RequiresReplace),
    )
    .with_attribute(
        "permanent_deletion",
        Attribute::bool().optional().description(
            "Remove the key for good on destroy instead of soft deleting it. Defaults to false.",
        ),
    )
    .with_attribute(
        "last_updated",
        Attribute::string()
            .computed()
            .description("Time of the last create or update by this provider."),
    )
}
