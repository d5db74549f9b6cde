use unkey_tfsdk::{Attribute, PlanModifier, Schema, Validator};

use super::{id_attribute, identifier_validator};

/// Schema of `unkey_api`.
#[must_use]
pub fn api_schema() -> Schema {
    Schema::new("Manages an API, the namespace keys are issued under.")
        .with_attribute("id", id_attribute("API id assigned by Unkey."))
        .with_attribute(
            "name",
            Attribute::string()
                .required()
                .description(
                    "Name of the API within the workspace, e.g. `payment-service-prod`. \
                     Changing it replaces the API.",
                )
                .validator(Validator::StringLengthBetween(3, 255))
                .validator(identifier_validator(
                    "must start with a letter and contain only letters, digits, '.', '_' or '-'",
                ))
                .plan_modifier(PlanModifier::RequiresReplace),
        )
}
