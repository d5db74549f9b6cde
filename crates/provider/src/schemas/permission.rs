use unkey_tfsdk::{Attribute, PlanModifier, Schema, Validator};

use super::{id_attribute, identifier_validator};

/// Schema of `unkey_permission`. Every attribute forces replacement.
#[must_use]
pub fn permission_schema() -> Schema {
    Schema::new("Manages a permission that can be granted to keys and roles.")
        .with_attribute("id", id_attribute("Permission id assigned by Unkey."))
        .with_attribute(
            "name",
            Attribute::string()
                .required()
                .description("Human-readable name.")
                .validator(Validator::StringLengthBetween(1, 512))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
        .with_attribute(
            "slug",
            Attribute::string()
                .required()
                .description(
                    "URL-safe identifier referenced by keys, e.g. `documents.read`. \
                     Unique within the workspace.",
                )
                .validator(identifier_validator(
                    "must start with a letter and contain only letters, digits, '.', '_' or '-'",
                ))
                .validator(Validator::StringLengthBetween(1, 128))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
        .with_attribute(
            "description",
            Attribute::string()
                .optional()
                .description("What the permission grants access to.")
                .validator(Validator::StringLengthAtMost(128))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
}
