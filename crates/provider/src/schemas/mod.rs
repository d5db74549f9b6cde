//! Declarative schemas for every resource.

mod api;
mod identity;
mod key;
mod permission;
mod ratelimit;
mod role;

pub use api::api_schema;
pub use identity::identity_schema;
pub use key::key_schema;
pub use permission::permission_schema;
pub use role::role_schema;

use unkey_tfsdk::{Attribute, PlanModifier, Validator};

/// Identifier pattern shared by API names, permission slugs and external ids.
pub(crate) const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9._-]*$";

/// Computed, server-assigned id that never changes after create.
pub(crate) fn id_attribute(description: &str) -> Attribute {
    Attribute::string()
        .computed()
        .description(description)
        .plan_modifier(PlanModifier::UseStateForUnknown)
}

pub(crate) fn identifier_validator(what: &'static str) -> Validator {
    Validator::StringRegex {
        pattern: IDENTIFIER_PATTERN,
        message: what,
    }
}
