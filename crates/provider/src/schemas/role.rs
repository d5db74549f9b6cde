use unkey_tfsdk::{Attribute, PlanModifier, Schema, Validator};

use super::id_attribute;

/// Schema of `unkey_role`.
#[must_use]
pub fn role_schema() -> Schema {
    Schema::new("Manages a role, a named bundle of permissions assigned to keys.")
        .with_attribute("id", id_attribute("Role id assigned by Unkey."))
        .with_attribute(
            "name",
            Attribute::string()
                .required()
                .description("Unique role name, e.g. `admin` or `billing_manager`.")
                .validator(Validator::StringLengthBetween(1, 512))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
        .with_attribute(
            "description",
            Attribute::string()
                .optional()
                .description("What the role grants.")
                .validator(Validator::StringLengthAtMost(2048))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
}
