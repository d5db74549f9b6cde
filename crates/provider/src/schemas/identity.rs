use unkey_tfsdk::{Attribute, PlanModifier, Schema, Validator};

use super::ratelimit::ratelimits_attribute;
use super::{id_attribute, identifier_validator};

/// Schema of `unkey_identity`.
#[must_use]
pub fn identity_schema() -> Schema {
    Schema::new("Manages an identity grouping keys that belong to one user or organisation.")
        .with_attribute("id", id_attribute("Identity id assigned by Unkey."))
        .with_attribute(
            "external_id",
            Attribute::string()
                .required()
                .description(
                    "Stable id of the user or organisation in your own system. \
                     Changing it replaces the identity.",
                )
                .validator(Validator::StringLengthBetween(3, 255))
                .validator(identifier_validator(
                    "must start with a letter and contain only letters, digits, '.', '_' or '-'",
                ))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
        .with_attribute(
            "meta",
            Attribute::string().optional().description(
                "JSON object returned when any key of the identity is verified. \
                 Do not store secrets here.",
            ),
        )
        .with_attribute(
            "ratelimits",
            ratelimits_attribute("Rate limits shared by every key of the identity."),
        )
}
