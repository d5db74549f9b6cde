use unkey_tfsdk::{Attribute, Validator};

/// The `ratelimits` list shared by keys and identities.
pub(crate) fn ratelimits_attribute(description: &str) -> Attribute {
    Attribute::list_nested([
        (
            "name",
            Attribute::string()
                .required()
                .description("Name referenced when verifying keys, e.g. `requests` or `files.downloads`.")
                .validator(Validator::StringLengthBetween(3, 128)),
        ),
        (
            "limit",
            Attribute::int64()
                .required()
                .description("Operations allowed per window.")
                .validator(Validator::Int64AtLeast(1)),
        ),
        (
            "duration",
            Attribute::int64()
                .required()
                .description("Window length in milliseconds.")
                .validator(Validator::Int64AtLeast(1000)),
        ),
        (
            "auto_apply",
            Attribute::bool()
                .required()
                .description("Apply the limit on every verification without naming it."),
        ),
    ])
    .optional()
    .description(description)
    .validator(Validator::ListSizeAtMost(50))
}
